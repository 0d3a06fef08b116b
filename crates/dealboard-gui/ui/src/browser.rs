use dealboard_core::router::History;
use dealboard_core::selection::SelectionStore;
use yew::Callback;

/// `SelectionStore` over browser local storage. Write failures are
/// swallowed: a missing store only costs the remembered selection.
pub struct LocalSelectionStore;

impl SelectionStore
  for LocalSelectionStore
{
  fn get(
    &self,
    key: &str
  ) -> Option<String> {
    web_sys::window()
      .and_then(|window| {
        window
          .local_storage()
          .ok()
          .flatten()
      })
      .and_then(|storage| {
        storage
          .get_item(key)
          .ok()
          .flatten()
      })
  }

  fn set(
    &self,
    key: &str,
    value: &str
  ) {
    if let Some(storage) =
      web_sys::window().and_then(
        |window| {
          window
            .local_storage()
            .ok()
            .flatten()
        }
      )
    {
      let _ =
        storage.set_item(key, value);
    }
  }
}

/// `History` over the browser URL. `push_search` rewrites the query
/// string in place and emits `refresh` so the container re-resolves
/// against the updated URL.
#[derive(Clone, PartialEq)]
pub struct BrowserHistory {
  refresh: Callback<()>
}

impl BrowserHistory {
  pub fn new(
    refresh: Callback<()>
  ) -> Self {
    Self { refresh }
  }
}

impl History for BrowserHistory {
  fn search(&self) -> String {
    web_sys::window()
      .and_then(|window| {
        window.location().search().ok()
      })
      .unwrap_or_default()
  }

  fn push_search(
    &self,
    search: &str
  ) {
    if let Some(window) =
      web_sys::window()
    {
      let pathname = window
        .location()
        .pathname()
        .unwrap_or_else(|_| {
          "/".to_string()
        });
      let url = if search.is_empty() {
        pathname
      } else {
        format!("{pathname}?{search}")
      };

      if let Ok(history) =
        window.history()
      {
        let _ = history
          .push_state_with_url(
            &wasm_bindgen::JsValue::NULL,
            "",
            Some(&url)
          );
      }
    }

    self.refresh.emit(());
  }
}

/// Full-page navigation; only Invalid-id-recovery uses this.
pub fn hard_redirect(path: &str) {
  if let Some(window) =
    web_sys::window()
  {
    let _ = window
      .location()
      .set_href(path);
  }
}
