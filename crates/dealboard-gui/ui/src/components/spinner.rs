use yew::{
  Html,
  function_component,
  html
};

#[function_component(Spinner)]
pub fn spinner() -> Html {
  html! {
      <div class="spinner" role="status">
          <span class="spinner-dot"></span>
      </div>
  }
}
