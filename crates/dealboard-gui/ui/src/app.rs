use dealboard_core::filters;
use dealboard_core::query_params::QueryParams;
use dealboard_core::reconcile::{
  self,
  Decision,
  PendingFetch,
  RemoteQuery,
  ResolveInput
};
use dealboard_core::router;
use dealboard_core::router::History;
use dealboard_core::selection::PersistedSelection;
use dealboard_gui_shared::{
  BoardDto,
  ProductDto
};
use wasm_bindgen_futures::spawn_local;
use web_sys::MouseEvent;
use yew::{
  Callback,
  Html,
  function_component,
  html,
  use_effect_with,
  use_state
};

use crate::api;
use crate::browser::{
  self,
  BrowserHistory,
  LocalSelectionStore
};
use crate::components::{
  MainActionBar,
  PageHeader,
  Spinner
};

/// Binds the selection reconciler to the browser: issues the board
/// queries under the core skip policy, re-resolves on every URL
/// change, applies the persist effect, and renders whatever the
/// decision says.
#[function_component(MainActionBarContainer)]
pub fn main_action_bar_container()
-> Html {
  let route_epoch =
    use_state(|| 0_u64);
  let boards = use_state(|| {
    RemoteQuery::<Vec<BoardDto>>::Loading
  });
  let products = use_state(|| {
    RemoteQuery::<Vec<ProductDto>>::Loading
  });
  let last_used = use_state(|| {
    RemoteQuery::<BoardDto>::Skipped
  });
  let board_detail = use_state(|| {
    RemoteQuery::<BoardDto>::Skipped
  });

  let history = {
    let route_epoch =
      route_epoch.clone();
    BrowserHistory::new(
      Callback::from(move |()| {
        route_epoch.set(
          (*route_epoch)
            .saturating_add(1)
        );
      })
    )
  };

  // Boards and products load once. A failed fetch stays loading; the
  // transport layer owns retries.
  {
    let boards = boards.clone();
    let products = products.clone();
    use_effect_with((), move |_| {
      spawn_local(async move {
        match api::fetch_boards().await
        {
          | Ok(list) => {
            boards.set(
              RemoteQuery::Ready(
                Some(list)
              )
            );
          }
          | Err(error) => {
            tracing::error!(
              %error,
              "boards query failed"
            );
          }
        }
      });
      spawn_local(async move {
        match api::fetch_products()
          .await
        {
          | Ok(list) => {
            products.set(
              RemoteQuery::Ready(
                Some(list)
              )
            );
          }
          | Err(error) => {
            tracing::error!(
              %error,
              "products query failed"
            );
          }
        }
      });
      || ()
    });
  }

  // Conditional subscriptions keyed on the live query string: detail
  // only when the URL names a board, last-used only when it does not.
  {
    let last_used = last_used.clone();
    let board_detail =
      board_detail.clone();
    let search = history.search();
    use_effect_with(
      search,
      move |search| {
        let params =
          QueryParams::parse(search);

        match reconcile::wants_board_detail(
          &params
        ) {
          | Some(id) => {
            let id = id.to_string();
            last_used.set(
              RemoteQuery::Skipped
            );
            board_detail.set(
              RemoteQuery::Loading
            );
            spawn_local(async move {
              match api::fetch_board_detail(
                &id
              )
              .await
              {
                | Ok(record) => {
                  board_detail.set(
                    RemoteQuery::Ready(
                      record
                    )
                  );
                }
                | Err(error) => {
                  tracing::error!(
                    %error,
                    "board detail query failed"
                  );
                }
              }
            });
          }
          | None => {
            board_detail.set(
              RemoteQuery::Skipped
            );
            last_used.set(
              RemoteQuery::Loading
            );
            spawn_local(async move {
              match api::fetch_last_board()
                .await
              {
                | Ok(record) => {
                  last_used.set(
                    RemoteQuery::Ready(
                      record
                    )
                  );
                }
                | Err(error) => {
                  tracing::error!(
                    %error,
                    "last used board query failed"
                  );
                }
              }
            });
          }
        }

        || ()
      }
    );
  }

  let store = LocalSelectionStore;
  let query_params = QueryParams::parse(
    &history.search()
  );
  let persisted =
    PersistedSelection::load(&store);

  let outcome = reconcile::resolve(
    &ResolveInput {
      query_params: &query_params,
      persisted: &persisted,
      boards: &*boards,
      last_used: &*last_used,
      board_detail: &*board_detail,
    }
  );

  if let Some(selection) =
    &outcome.persist
  {
    selection.save(&store);
  }

  match outcome.decision {
    | Decision::Loading(
      PendingFetch::Boards
    ) => html! { <PageHeader /> },
    | Decision::Loading(_) => {
      html! { <Spinner /> }
    }
    | Decision::Defer(redirect) => {
      router::set_params(
        &history,
        redirect.query_params(),
        false
      );
      Html::default()
    }
    | Decision::RecoverInvalidId => {
      browser::hard_redirect(
        reconcile::DEFAULT_BOARD_ROUTE
      );
      Html::default()
    }
    | Decision::Nothing => {
      Html::default()
    }
    | Decision::Resolved {
      board,
      pipeline
    } => {
      let board_list = boards
        .record()
        .cloned()
        .unwrap_or_default();
      let product_list = products
        .record()
        .cloned()
        .unwrap_or_default();
      let filtered =
        filters::is_filtered(
          &query_params
        );

      let on_board_select = {
        let history = history.clone();
        Callback::from(
          move |id: String| {
            let mut update =
              QueryParams::new();
            update.insert("id", id);
            router::set_params(
              &history, update, false
            );
          }
        )
      };

      let on_pipeline_select = {
        let history = history.clone();
        Callback::from(
          move |id: String| {
            let mut update =
              QueryParams::new();
            update.insert(
              "pipelineId",
              id
            );
            router::set_params(
              &history, update, false
            );
          }
        )
      };

      let on_search = {
        let history = history.clone();
        Callback::from(
          move |text: String| {
            filters::set_search(
              &history, &text
            );
          }
        )
      };

      let on_date_filter_select = {
        let history = history.clone();
        Callback::from(
          move |(name, value): (
            String,
            String
          )| {
            filters::select_date_filter(
              &history, &name, &value
            );
          }
        )
      };

      let on_select = {
        let history = history.clone();
        Callback::from(
          move |(name, values): (
            String,
            Vec<String>
          )| {
            filters::select_filter(
              &history, &name, &values
            );
          }
        )
      };

      let on_clear = {
        let history = history.clone();
        Callback::from(
          move |name: String| {
            filters::clear_filter_key(
              &history, &name
            );
          }
        )
      };

      let on_clear_filter = {
        let history = history.clone();
        Callback::from(
          move |_event: MouseEvent| {
            filters::clear_filters(
              &history
            );
          }
        )
      };

      html! {
          <MainActionBar
              current_board={board}
              current_pipeline={pipeline}
              boards={board_list}
              products={product_list}
              {filtered}
              {on_board_select}
              {on_pipeline_select}
              {on_search}
              {on_date_filter_select}
              {on_select}
              {on_clear}
              {on_clear_filter}
          />
      }
    }
  }
}
