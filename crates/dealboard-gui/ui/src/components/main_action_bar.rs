use dealboard_core::filters::DATE_FILTER_PARAMS;
use dealboard_gui_shared::{
  BoardDto,
  PipelineDto,
  ProductDto
};
use web_sys::{
  Event,
  HtmlInputElement,
  HtmlSelectElement,
  MouseEvent
};
use yew::{
  Callback,
  Html,
  Properties,
  TargetCast,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct MainActionBarProps {
  pub current_board:    BoardDto,
  pub current_pipeline:
    Option<PipelineDto>,
  pub boards:           Vec<BoardDto>,
  pub products:
    Vec<ProductDto>,
  pub filtered:         bool,
  pub on_board_select:
    Callback<String>,
  pub on_pipeline_select:
    Callback<String>,
  pub on_search:
    Callback<String>,
  pub on_date_filter_select:
    Callback<(String, String)>,
  pub on_select:
    Callback<(String, Vec<String>)>,
  pub on_clear: Callback<String>,
  pub on_clear_filter:
    Callback<MouseEvent>
}

/// Presentational toolbar: everything it shows and every action it
/// emits comes in through props.
#[function_component(MainActionBar)]
pub fn main_action_bar(
  props: &MainActionBarProps
) -> Html {
  let on_board_change = {
    let on_board_select =
      props.on_board_select.clone();
    Callback::from(
      move |event: Event| {
        let select: HtmlSelectElement =
          event.target_unchecked_into();
        on_board_select
          .emit(select.value());
      }
    )
  };

  let on_pipeline_change = {
    let on_pipeline_select = props
      .on_pipeline_select
      .clone();
    Callback::from(
      move |event: Event| {
        let select: HtmlSelectElement =
          event.target_unchecked_into();
        on_pipeline_select
          .emit(select.value());
      }
    )
  };

  let on_search_change = {
    let on_search =
      props.on_search.clone();
    Callback::from(
      move |event: Event| {
        let input: HtmlInputElement =
          event.target_unchecked_into();
        on_search.emit(input.value());
      }
    )
  };

  let on_product_change = {
    let on_select =
      props.on_select.clone();
    let on_clear =
      props.on_clear.clone();
    Callback::from(
      move |event: Event| {
        let select: HtmlSelectElement =
          event.target_unchecked_into();
        let value = select.value();
        if value.is_empty() {
          on_clear.emit(
            "productIds".to_string()
          );
        } else {
          on_select.emit((
            "productIds".to_string(),
            vec![value]
          ));
        }
      }
    )
  };

  let current_pipeline_id = props
    .current_pipeline
    .as_ref()
    .map(|pipeline| {
      pipeline.id.clone()
    })
    .unwrap_or_default();

  html! {
      <div class="main-action-bar">
          <select class="board-select" onchange={on_board_change}>
              {
                  for props.boards.iter().map(|board| {
                      html! {
                          <option
                              value={board.id.clone()}
                              selected={board.id == props.current_board.id}
                          >
                              { &board.name }
                          </option>
                      }
                  })
              }
          </select>

          <select class="pipeline-select" onchange={on_pipeline_change}>
              {
                  for props.current_board.pipelines.iter().map(|pipeline| {
                      html! {
                          <option
                              value={pipeline.id.clone()}
                              selected={pipeline.id == current_pipeline_id}
                          >
                              { &pipeline.name }
                          </option>
                      }
                  })
              }
          </select>

          <input
              class="search"
              type="text"
              placeholder="Search deals"
              onchange={on_search_change}
          />

          <div class="date-filters">
              {
                  for DATE_FILTER_PARAMS.iter().map(|name| {
                      let on_date_filter_select = props.on_date_filter_select.clone();
                      let key = name.to_string();
                      html! {
                          <button
                              class="btn"
                              onclick={move |_| {
                                  on_date_filter_select.emit((key.clone(), "true".to_string()))
                              }}
                          >
                              { *name }
                          </button>
                      }
                  })
              }
          </div>

          <select class="product-select" onchange={on_product_change}>
              <option value="" selected={true}>{ "All products" }</option>
              {
                  for props.products.iter().map(|product| {
                      html! {
                          <option value={product.id.clone()}>{ &product.name }</option>
                      }
                  })
              }
          </select>

          {
              if props.filtered {
                  html! {
                      <button class="btn danger" onclick={props.on_clear_filter.clone()}>
                          { "Clear Filter" }
                      </button>
                  }
              } else {
                  Html::default()
              }
          }
      </div>
  }
}
