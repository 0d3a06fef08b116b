use tracing::debug;

use crate::query_params::QueryParams;
use crate::router::{self, History};

/// Date filter keys. At most one of these is live at any time.
pub const DATE_FILTER_PARAMS: [&str; 5] =
    ["nextDay", "nextWeek", "nextMonth", "overdue", "noCloseDate"];

/// Every key the toolbar counts as an active filter: the four entity
/// id filters plus the date filter keys.
pub const COMMON_PARAMS: [&str; 9] = [
    "companyIds",
    "customerIds",
    "assignedUserIds",
    "productIds",
    "nextDay",
    "nextWeek",
    "nextMonth",
    "overdue",
    "noCloseDate",
];

/// Activates one date filter, displacing whichever one is live. The
/// displaced key cannot be dropped by a plain merge, so that path goes
/// through `replace_param` with a pre-pruned map; the fresh-slot path
/// merges and resets pagination.
pub fn select_date_filter(history: &dyn History, name: &str, value: &str) {
    let mut params = QueryParams::parse(&history.search());
    let stale = params
        .keys()
        .find(|key| DATE_FILTER_PARAMS.contains(key))
        .map(str::to_string);

    let mut query = QueryParams::new();
    query.insert(name, value);

    if let Some(stale) = stale {
        debug!(%stale, replacement = %name, "swapping date filter");
        params.remove(&stale);
        router::replace_param(history, params, query);
        return;
    }

    router::set_params(history, query, true);
}

/// Merges one filter key into the URL; multiple values allowed. An
/// empty value list clears the key instead, since a valueless key
/// would serialize to nothing and the merge would be a silent no-op.
pub fn select_filter(history: &dyn History, name: &str, values: &[String]) {
    if values.is_empty() {
        clear_filter_key(history, name);
        return;
    }
    let mut query = QueryParams::new();
    match values {
        [single] => query.insert(name, single.clone()),
        many => query.insert_multi(name, many.to_vec()),
    }
    router::set_params(history, query, false);
}

/// Removes one filter key from the URL.
pub fn clear_filter_key(history: &dyn History, name: &str) {
    router::remove_params(history, &[name]);
}

/// True iff any common filter key is live.
pub fn is_filtered(params: &QueryParams) -> bool {
    params.keys().any(|key| COMMON_PARAMS.contains(&key))
}

/// Removes every common filter key in one update.
pub fn clear_filters(history: &dyn History) {
    router::remove_params(history, &COMMON_PARAMS);
}

/// Merges the free-text search term into the URL.
pub fn set_search(history: &dyn History, text: &str) {
    let mut query = QueryParams::new();
    query.insert("search", text);
    router::set_params(history, query, false);
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::{
        COMMON_PARAMS, DATE_FILTER_PARAMS, clear_filter_key, clear_filters, is_filtered,
        select_date_filter, select_filter, set_search,
    };
    use crate::query_params::{ParamValue, QueryParams};
    use crate::router::History;

    struct FakeHistory {
        search: RefCell<String>,
    }

    impl FakeHistory {
        fn with(search: &str) -> Self {
            Self {
                search: RefCell::new(search.to_string()),
            }
        }

        fn params(&self) -> QueryParams {
            QueryParams::parse(&self.search())
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

    fn live_date_filters(params: &QueryParams) -> Vec<String> {
        params
            .keys()
            .filter(|key| DATE_FILTER_PARAMS.contains(key))
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn date_filter_on_a_fresh_slot_resets_pagination() {
        let history = FakeHistory::with("id=b1&page=4");

        select_date_filter(&history, "overdue", "true");

        let params = history.params();
        assert_eq!(params.first("overdue"), Some("true"));
        assert!(!params.contains_key("page"));
        assert_eq!(params.first("id"), Some("b1"));
    }

    #[test]
    fn date_filter_displaces_the_live_one() {
        let history = FakeHistory::with("id=b1&nextWeek=true");

        select_date_filter(&history, "noCloseDate", "true");

        let params = history.params();
        assert_eq!(live_date_filters(&params), vec!["noCloseDate".to_string()]);
        assert_eq!(params.first("id"), Some("b1"));
    }

    #[test]
    fn at_most_one_date_filter_survives_any_sequence() {
        let history = FakeHistory::with("");

        for name in DATE_FILTER_PARAMS {
            select_date_filter(&history, name, "true");
            assert_eq!(live_date_filters(&history.params()).len(), 1);
        }
        assert_eq!(
            live_date_filters(&history.params()),
            vec!["noCloseDate".to_string()]
        );
    }

    #[test]
    fn select_filter_merges_multi_values_without_exclusivity() {
        let history = FakeHistory::with("overdue=true");

        select_filter(
            &history,
            "companyIds",
            &["a".to_string(), "b".to_string()],
        );

        let params = history.params();
        assert_eq!(
            params.get("companyIds"),
            Some(&ParamValue::Multi(vec!["a".to_string(), "b".to_string()]))
        );
        assert_eq!(params.first("overdue"), Some("true"));
    }

    #[test]
    fn select_filter_with_no_values_clears_the_key() {
        let history = FakeHistory::with("companyIds=a&id=b1");

        select_filter(&history, "companyIds", &[]);

        let params = history.params();
        assert!(!params.contains_key("companyIds"));
        assert_eq!(params.first("id"), Some("b1"));
    }

    #[test]
    fn clear_filter_key_removes_only_that_key() {
        let history = FakeHistory::with("companyIds=a&customerIds=b");

        clear_filter_key(&history, "companyIds");

        let params = history.params();
        assert!(!params.contains_key("companyIds"));
        assert_eq!(params.first("customerIds"), Some("b"));
    }

    #[test]
    fn is_filtered_iff_a_common_param_is_live() {
        assert!(!is_filtered(&QueryParams::parse("id=b1&pipelineId=p1")));
        assert!(is_filtered(&QueryParams::parse("id=b1&productIds=x")));
        assert!(is_filtered(&QueryParams::parse("nextDay=true")));
    }

    #[test]
    fn clear_filters_always_leaves_is_filtered_false() {
        let history =
            FakeHistory::with("id=b1&companyIds=a&customerIds=b&assignedUserIds=c&overdue=true");

        clear_filters(&history);

        let params = history.params();
        assert!(!is_filtered(&params));
        assert_eq!(params.first("id"), Some("b1"));
        for key in COMMON_PARAMS {
            assert!(!params.contains_key(key));
        }
    }

    #[test]
    fn set_search_merges_the_term() {
        let history = FakeHistory::with("id=b1");

        set_search(&history, "big deal");

        assert_eq!(history.params().first("search"), Some("big deal"));
    }
}
