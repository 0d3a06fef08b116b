use tracing::debug;

use crate::query_params::QueryParams;

/// The browser history collaborator: read the live query string,
/// replace it. `push_search` is expected to trigger a fresh render
/// pass so deferred decisions see the updated URL.
pub trait History {
    fn search(&self) -> String;
    fn push_search(&self, search: &str);
}

/// Removed by `set_params` when the caller asks for a pagination
/// reset, so a changed filter never lands on a stale page.
const PAGE_PARAM: &str = "page";

/// Merges `new_params` into the freshly-read current params and pushes
/// the result.
#[tracing::instrument(skip(history, new_params))]
pub fn set_params(history: &dyn History, new_params: QueryParams, reset_pagination: bool) {
    let mut params = QueryParams::parse(&history.search());
    if reset_pagination {
        params.remove(PAGE_PARAM);
    }
    params.merge(new_params);
    push(history, params);
}

/// Pushes `all_params` merged with `new_params`, ignoring the live
/// URL. The caller owns `all_params` and has usually already pruned a
/// key from it that a plain merge could not drop.
#[tracing::instrument(skip(history, all_params, new_params))]
pub fn replace_param(history: &dyn History, mut all_params: QueryParams, new_params: QueryParams) {
    all_params.merge(new_params);
    push(history, all_params);
}

/// Deletes `keys` from the live params in one update.
#[tracing::instrument(skip(history))]
pub fn remove_params(history: &dyn History, keys: &[&str]) {
    let mut params = QueryParams::parse(&history.search());
    for key in keys {
        params.remove(key);
    }
    push(history, params);
}

fn push(history: &dyn History, params: QueryParams) {
    let search = params.to_search();
    debug!(%search, "pushing query string");
    history.push_search(&search);
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::{History, remove_params, replace_param, set_params};
    use crate::query_params::QueryParams;

    struct FakeHistory {
        search: RefCell<String>,
    }

    impl FakeHistory {
        fn with(search: &str) -> Self {
            Self {
                search: RefCell::new(search.to_string()),
            }
        }
    }

    impl History for FakeHistory {
        fn search(&self) -> String {
            self.search.borrow().clone()
        }

        fn push_search(&self, search: &str) {
            *self.search.borrow_mut() = search.to_string();
        }
    }

    #[test]
    fn set_params_merges_into_live_url() {
        let history = FakeHistory::with("id=b1&page=3");
        let mut update = QueryParams::new();
        update.insert("pipelineId", "p1");

        set_params(&history, update, false);

        let params = QueryParams::parse(&history.search());
        assert_eq!(params.first("id"), Some("b1"));
        assert_eq!(params.first("pipelineId"), Some("p1"));
        assert_eq!(params.first("page"), Some("3"));
    }

    #[test]
    fn set_params_can_reset_pagination() {
        let history = FakeHistory::with("id=b1&page=3");
        let mut update = QueryParams::new();
        update.insert("overdue", "true");

        set_params(&history, update, true);

        let params = QueryParams::parse(&history.search());
        assert!(!params.contains_key("page"));
        assert_eq!(params.first("overdue"), Some("true"));
    }

    #[test]
    fn replace_param_ignores_the_live_url() {
        let history = FakeHistory::with("nextDay=true&id=b1");

        let mut pruned = QueryParams::parse(&history.search());
        pruned.remove("nextDay");
        let mut update = QueryParams::new();
        update.insert("overdue", "true");

        replace_param(&history, pruned, update);

        let params = QueryParams::parse(&history.search());
        assert!(!params.contains_key("nextDay"));
        assert_eq!(params.first("overdue"), Some("true"));
        assert_eq!(params.first("id"), Some("b1"));
    }

    #[test]
    fn remove_params_deletes_in_one_update() {
        let history = FakeHistory::with("companyIds=a&customerIds=b&id=b1");

        remove_params(&history, &["companyIds", "customerIds"]);

        let params = QueryParams::parse(&history.search());
        assert!(!params.contains_key("companyIds"));
        assert!(!params.contains_key("customerIds"));
        assert_eq!(params.first("id"), Some("b1"));
    }
}
