//! Transaction classifier
//!
//! Pure, total mapping from a raw notification to an optional transaction
//! event:
//!
//! 1. Source filter - unmonitored packages are rejected before any text work
//! 2. Text extraction - missing title/body read as empty strings
//! 3. Keyword test - case-insensitive substring match on `title + " " + body`
//! 4. Event construction - original-case text and the host timestamp, verbatim

use super::keywords::is_transaction_text;
use super::notification::{DropReason, RawNotification, TransactionEvent};
use super::packages::is_monitored_package;

/// Classify a notification, reporting why it was rejected.
pub fn evaluate(raw: &RawNotification) -> Result<TransactionEvent, DropReason> {
    if !is_monitored_package(&raw.source_package_id) {
        return Err(DropReason::UnmonitoredSource);
    }

    let title = raw.title_text();
    let body = raw.body_text();

    if !is_transaction_text(title, body) {
        return Err(DropReason::NotTransaction);
    }

    Ok(TransactionEvent {
        title: title.to_string(),
        body: body.to_string(),
        source_package_id: raw.source_package_id.clone(),
        timestamp: raw.posted_at_epoch_millis,
    })
}

/// Classify a notification.
///
/// Returns `None` for unmonitored sources and for text with no transaction
/// keyword.
pub fn classify(raw: &RawNotification) -> Option<TransactionEvent> {
    evaluate(raw).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::keywords::TRANSACTION_KEYWORDS;
    use crate::domain::packages::MONITORED_PACKAGES;
    use proptest::prelude::*;

    const POSTED_AT: i64 = 1_714_000_000_123;

    fn nubank(title: &str, body: &str) -> RawNotification {
        RawNotification::new("com.nu.production", POSTED_AT)
            .with_title(title)
            .with_body(body)
    }

    #[test]
    fn test_nubank_purchase_accepted() {
        let raw = nubank("Compra aprovada", "R$ 45,00 no cartão final 1234");
        let event = classify(&raw).expect("should be a transaction");

        assert_eq!(event.title, "Compra aprovada");
        assert_eq!(event.body, "R$ 45,00 no cartão final 1234");
        assert_eq!(event.source_package_id, "com.nu.production");
        assert_eq!(event.timestamp, POSTED_AT);
    }

    #[test]
    fn test_unrelated_app_rejected_before_keywords() {
        let raw = RawNotification::new("com.unrelated.app", POSTED_AT)
            .with_title("Compra aprovada")
            .with_body("R$ 10,00");
        assert_eq!(evaluate(&raw), Err(DropReason::UnmonitoredSource));
    }

    #[test]
    fn test_bradesco_empty_text_rejected() {
        let raw = RawNotification::new("com.bradesco", POSTED_AT)
            .with_title("")
            .with_body("");
        assert_eq!(evaluate(&raw), Err(DropReason::NotTransaction));
    }

    #[test]
    fn test_missing_text_is_not_an_error() {
        let raw = RawNotification::new("br.com.bradesco", POSTED_AT);
        assert_eq!(evaluate(&raw), Err(DropReason::NotTransaction));

        let raw = RawNotification::new("br.com.bradesco", POSTED_AT).with_body("PIX Recebido");
        let event = classify(&raw).unwrap();
        assert_eq!(event.title, "");
        assert_eq!(event.body, "PIX Recebido");
    }

    #[test]
    fn test_case_insensitive() {
        let upper = classify(&nubank("PIX recebido", ""));
        let lower = classify(&nubank("pix recebido", ""));
        assert!(upper.is_some());
        assert!(lower.is_some());
        assert_eq!(upper.unwrap().title, "PIX recebido");
    }

    #[test]
    fn test_event_keeps_original_case() {
        let event = classify(&nubank("TRANSFERÊNCIA Enviada", "Para FULANO")).unwrap();
        assert_eq!(event.title, "TRANSFERÊNCIA Enviada");
        assert_eq!(event.body, "Para FULANO");
    }

    #[test]
    fn test_non_transaction_from_bank() {
        assert_eq!(classify(&nubank("Olá", "Temos novidades para você")), None);
    }

    fn monitored_package() -> impl Strategy<Value = String> {
        prop::sample::select(MONITORED_PACKAGES.to_vec()).prop_map(str::to_string)
    }

    fn keyword() -> impl Strategy<Value = String> {
        prop::sample::select(TRANSACTION_KEYWORDS.to_vec()).prop_map(str::to_string)
    }

    proptest! {
        #[test]
        fn prop_unmonitored_never_classified(
            package in "[a-z]{2,8}(\\.[a-z]{2,8}){1,3}",
            title in ".*",
            body in ".*",
        ) {
            prop_assume!(!MONITORED_PACKAGES.contains(&package.as_str()));
            let raw = RawNotification::new(package, 0).with_title(title).with_body(body);
            prop_assert_eq!(classify(&raw), None);
        }

        #[test]
        fn prop_accept_iff_keyword_present(
            package in monitored_package(),
            title in "[a-zA-Z0-9 ,$]{0,24}",
            body in "[a-zA-Z0-9 ,$]{0,24}",
        ) {
            let probe = format!("{title} {body}").to_lowercase();
            let expected = TRANSACTION_KEYWORDS.iter().any(|k| probe.contains(k));
            let raw = RawNotification::new(package, 0).with_title(title).with_body(body);
            prop_assert_eq!(classify(&raw).is_some(), expected);
        }

        #[test]
        fn prop_keyword_in_any_case_is_accepted(
            package in monitored_package(),
            keyword in keyword(),
            prefix in "[a-z ]{0,8}",
            upper in any::<bool>(),
        ) {
            let title = if upper { keyword.to_uppercase() } else { keyword.clone() };
            let raw = RawNotification::new(package, 7).with_title(format!("{prefix}{title}"));
            let event = classify(&raw);
            prop_assert!(event.is_some());
            prop_assert_eq!(event.unwrap().timestamp, 7);
        }

        #[test]
        fn prop_accepted_event_preserves_fields(
            package in monitored_package(),
            keyword in keyword(),
            body in ".{0,32}",
            posted_at in any::<i64>(),
        ) {
            let raw = RawNotification::new(package.clone(), posted_at)
                .with_title(keyword.clone())
                .with_body(body.clone());
            let event = classify(&raw).unwrap();
            prop_assert_eq!(event.title, keyword);
            prop_assert_eq!(event.body, body);
            prop_assert_eq!(event.source_package_id, package);
            prop_assert_eq!(event.timestamp, posted_at);
        }
    }
}
