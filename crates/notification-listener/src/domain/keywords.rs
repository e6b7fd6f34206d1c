//! Transaction keyword heuristics
//!
//! A notification is a transaction if the lower-cased `title + " " + body`
//! contains any keyword as a plain substring. There are no word boundaries:
//! `real` also matches inside longer words.

/// Lowercase keywords covering purchases, payments, transfers, withdrawals,
/// deposits, debit/credit, statements, cards, accounts, the currency symbol,
/// and status verbs.
pub const TRANSACTION_KEYWORDS: [&str; 17] = [
    "compra",
    "pagamento",
    "pix",
    "transferência",
    "saque",
    "depósito",
    "débito",
    "crédito",
    "fatura",
    "cartão",
    "conta",
    "real",
    "r$",
    "aprovado",
    "recebido",
    "enviado",
    "cobrado",
];

/// Returns true if the combined text mentions any transaction keyword.
pub fn is_transaction_text(title: &str, body: &str) -> bool {
    let probe = format!("{title} {body}").to_lowercase();
    TRANSACTION_KEYWORDS
        .iter()
        .any(|keyword| probe.contains(keyword))
}
