//! Static GraphQL documents for the deal board page.

pub const BOARDS: &str = "
  query dealBoards {
    dealBoards {
      _id
      name
    }
  }
";

pub const BOARD_GET_LAST: &str = "
  query dealBoardGetLast {
    dealBoardGetLast {
      _id
      name
      pipelines {
        _id
        name
      }
    }
  }
";

pub const BOARD_DETAIL: &str = "
  query dealBoardDetail($_id: String!) {
    dealBoardDetail(_id: $_id) {
      _id
      name
      pipelines {
        _id
        name
      }
    }
  }
";

pub const PRODUCTS: &str = "
  query products {
    products {
      _id
      name
      type
    }
  }
";

/// Documents for the general settings page.
pub mod settings {
  pub const CONFIGS: &str = "
    query configs {
      configs {
        _id
        code
        value
      }
    }
  ";

  pub const CONFIGS_GET_ENV: &str = "
    query configsGetEnv {
      configsGetEnv {
        USE_BRAND_RESTRICTIONS
        USE_CHAT_RESTRICTIONS
      }
    }
  ";
}
