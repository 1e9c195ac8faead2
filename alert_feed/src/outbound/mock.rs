//! This module provides [mockall::mock] concrete structs which can be used for testing

use crate::domain::ports::{AlertLedger, CurrentUserSource};
use mockall::mock;
use model_alerts::Alert;
use std::convert::Infallible;

const _NOT_PROD: () = const {
    assert!(
        cfg!(debug_assertions),
        "You are trying to include mock code in a production build please run `cargo tree -i alert_feed -e features -p <FAILING_PACKAGE>` to see how the mock feature is being included in [dependencies]"
    );
};

mock! {
    pub Ledger {}
    impl AlertLedger for Ledger {
        type Err = Infallible;

        fn fetch_for_user<'a>(&self, user_id: &'a str) -> impl Future<Output = Result<Vec<Alert>, Infallible>> + Send;

        fn mark_read<'a>(&self, notification_id: i64, user_id: &'a str) -> impl Future<Output = Result<(), Infallible>> + Send;

        fn mark_all_read<'a>(&self, user_id: &'a str) -> impl Future<Output = Result<(), Infallible>> + Send;
    }
}

mock! {
    pub UserSource {}
    impl CurrentUserSource for UserSource {
        fn current_user(&self) -> Option<String>;
    }
}
