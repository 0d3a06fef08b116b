use serde::{
  Deserialize,
  Serialize
};

#[derive(
  Debug,
  Clone,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
)]
pub struct PipelineDto {
  #[serde(rename = "_id")]
  pub id:   String,
  #[serde(default)]
  pub name: String
}

#[derive(
  Debug,
  Clone,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
)]
pub struct BoardDto {
  #[serde(rename = "_id")]
  pub id:        String,
  #[serde(default)]
  pub name:      String,
  #[serde(default)]
  pub pipelines: Vec<PipelineDto>
}

#[derive(
  Debug,
  Clone,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
)]
pub struct ProductDto {
  #[serde(rename = "_id")]
  pub id:           String,
  #[serde(default)]
  pub name:         String,
  #[serde(rename = "type", default)]
  pub product_type: Option<String>
}

#[derive(
  Debug,
  Clone,
  Serialize,
  Deserialize,
  PartialEq,
)]
pub struct ConfigDto {
  #[serde(rename = "_id")]
  pub id:    String,
  pub code:  String,
  #[serde(default)]
  pub value: serde_json::Value
}

#[derive(
  Debug,
  Clone,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
)]
pub struct EnvConfigDto {
  #[serde(
    rename = "USE_BRAND_RESTRICTIONS",
    default
  )]
  pub use_brand_restrictions:
    Option<String>,
  #[serde(
    rename = "USE_CHAT_RESTRICTIONS",
    default
  )]
  pub use_chat_restrictions:
    Option<String>
}

#[derive(
  Debug, Clone, Deserialize, PartialEq,
)]
pub struct GraphqlError {
  pub message: String
}

#[derive(Debug, Clone, Deserialize)]
pub struct GraphqlResponse<T> {
  pub data:   Option<T>,
  #[serde(default)]
  pub errors:
    Option<Vec<GraphqlError>>
}

#[derive(Debug, Clone, Deserialize)]
pub struct BoardsData {
  #[serde(
    rename = "dealBoards",
    default
  )]
  pub deal_boards: Vec<BoardDto>
}

#[derive(Debug, Clone, Deserialize)]
pub struct BoardGetLastData {
  #[serde(rename = "dealBoardGetLast")]
  pub deal_board_get_last:
    Option<BoardDto>
}

#[derive(Debug, Clone, Deserialize)]
pub struct BoardDetailData {
  #[serde(rename = "dealBoardDetail")]
  pub deal_board_detail:
    Option<BoardDto>
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProductsData {
  #[serde(default)]
  pub products: Vec<ProductDto>
}

#[derive(Debug, Clone, Deserialize)]
pub struct ConfigsData {
  #[serde(default)]
  pub configs: Vec<ConfigDto>
}

#[derive(Debug, Clone, Deserialize)]
pub struct EnvConfigData {
  #[serde(rename = "configsGetEnv")]
  pub configs_get_env: EnvConfigDto
}
