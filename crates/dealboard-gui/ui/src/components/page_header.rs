use yew::{
  Html,
  function_component,
  html
};

/// Empty header strip shown while the boards list loads, so the page
/// does not jump when the toolbar arrives.
#[function_component(PageHeader)]
pub fn page_header() -> Html {
  html! {
      <div class="page-header"></div>
  }
}
