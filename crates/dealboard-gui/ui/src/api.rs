use dealboard_gui_shared::{
  BoardDetailData,
  BoardDto,
  BoardGetLastData,
  BoardsData,
  ConfigDto,
  ConfigsData,
  EnvConfigData,
  EnvConfigDto,
  GraphqlResponse,
  ProductDto,
  ProductsData
};
use gloo::net::http::Request;
use serde::de::DeserializeOwned;
use serde_json::json;

use crate::graphql;

const GRAPHQL_ENDPOINT: &str =
  "/graphql";

pub async fn graphql_query<T>(
  document: &str,
  variables: serde_json::Value
) -> Result<T, String>
where
  T: DeserializeOwned
{
  let body = json!({
    "query": document,
    "variables": variables,
  });

  let response =
    Request::post(GRAPHQL_ENDPOINT)
      .header(
        "content-type",
        "application/json"
      )
      .json(&body)
      .map_err(|e| {
        format!(
          "failed to encode request: {e}"
        )
      })?
      .send()
      .await
      .map_err(|e| {
        format!("request error: {e}")
      })?;

  let envelope: GraphqlResponse<T> =
    response.json().await.map_err(
      |e| format!("decode error: {e}")
    )?;

  if let Some(errors) = envelope.errors
    && !errors.is_empty()
  {
    return Err(
      errors
        .iter()
        .map(|error| {
          error.message.clone()
        })
        .collect::<Vec<_>>()
        .join("; ")
    );
  }

  envelope.data.ok_or_else(|| {
    "missing response data".to_string()
  })
}

pub async fn fetch_boards()
-> Result<Vec<BoardDto>, String> {
  let data: BoardsData = graphql_query(
    graphql::BOARDS,
    json!({})
  )
  .await?;
  Ok(data.deal_boards)
}

pub async fn fetch_last_board()
-> Result<Option<BoardDto>, String> {
  let data: BoardGetLastData =
    graphql_query(
      graphql::BOARD_GET_LAST,
      json!({})
    )
    .await?;
  Ok(data.deal_board_get_last)
}

pub async fn fetch_board_detail(
  id: &str
) -> Result<Option<BoardDto>, String> {
  let data: BoardDetailData =
    graphql_query(
      graphql::BOARD_DETAIL,
      json!({ "_id": id })
    )
    .await?;
  Ok(data.deal_board_detail)
}

pub async fn fetch_products()
-> Result<Vec<ProductDto>, String> {
  let data: ProductsData =
    graphql_query(
      graphql::PRODUCTS,
      json!({})
    )
    .await?;
  Ok(data.products)
}

pub async fn fetch_configs()
-> Result<Vec<ConfigDto>, String> {
  let data: ConfigsData =
    graphql_query(
      graphql::settings::CONFIGS,
      json!({})
    )
    .await?;
  Ok(data.configs)
}

pub async fn fetch_env_config()
-> Result<EnvConfigDto, String> {
  let data: EnvConfigData =
    graphql_query(
      graphql::settings::CONFIGS_GET_ENV,
      json!({})
    )
    .await?;
  Ok(data.configs_get_env)
}
