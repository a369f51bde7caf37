//! Declarative descriptor table for the five CRUD entities.
//!
//! Endpoint paths, element ids and row-button classes used to live scattered
//! as string literals in per-entity UI code; they are the server contract, so
//! they are collected here once and the generic controller reads them from
//! the table.

use crate::domain::trade_math::TradeSide;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Account,
    Transaction,
    Security,
    TradeEntry,
    TradeExit,
}

impl EntityKind {
    pub const ALL: [EntityKind; 5] = [
        EntityKind::Account,
        EntityKind::Transaction,
        EntityKind::Security,
        EntityKind::TradeEntry,
        EntityKind::TradeExit,
    ];

    pub const fn config(self) -> &'static EntityConfig {
        match self {
            EntityKind::Account => &ACCOUNT,
            EntityKind::Transaction => &TRANSACTION,
            EntityKind::Security => &SECURITY,
            EntityKind::TradeEntry => &TRADE_ENTRY,
            EntityKind::TradeExit => &TRADE_EXIT,
        }
    }
}

/// Immutable per-entity descriptor. One instance per [`EntityKind`], defined
/// below; everything the generic modal controller and list regions need to
/// know about an entity lives here.
#[derive(Debug)]
pub struct EntityConfig {
    pub kind: EntityKind,
    /// URL path segment: `/api/<entity_name>/<id>/`, `/<entity_name>/edit/<id>/`.
    pub entity_name: &'static str,
    /// Human form used in confirmations and failure banners.
    pub display_name: &'static str,
    /// HTML-fragment endpoint for the list region (table markup, not JSON).
    pub list_endpoint: &'static str,
    /// HTML-fragment endpoint for the create form. `None` when creation goes
    /// through a dedicated flow (securities are added from the search panel).
    pub create_endpoint: Option<&'static str>,
    /// Id of the modal element inside the served fragment.
    pub modal_element_id: &'static str,
    /// Id of the form element inside the served fragment.
    pub form_element_id: &'static str,
    /// Inputs in the served fragments are `id_<entity>_<field>`; inline
    /// validation errors are keyed off this prefix.
    pub field_error_prefix: &'static str,
    /// Row action classes exactly as the server fragments render them. The
    /// dash/underscore mix is historical; the markup is the contract.
    pub edit_button_class: Option<&'static str>,
    pub delete_button_class: &'static str,
    /// Present when the entity's form carries recalculated amount fields.
    pub trade_side: Option<TradeSide>,
}

impl EntityConfig {
    pub fn edit_endpoint(&self, id: i64) -> String {
        format!("/{}/edit/{}/", self.entity_name, id)
    }

    pub fn delete_endpoint(&self, id: i64) -> String {
        format!("/api/{}/{}/", self.entity_name, id)
    }

    /// Id of the input element a validation error for `field` attaches to.
    pub fn field_input_id(&self, field: &str) -> String {
        format!("{}{}", self.field_error_prefix, field)
    }

    pub fn confirm_delete_text(&self) -> String {
        format!("Are you sure you want to delete this {}?", self.display_name)
    }

    pub fn delete_failed_text(&self) -> String {
        format!("Failed to delete {}.", self.display_name)
    }

    pub fn load_form_failed_text(&self) -> String {
        format!("Could not load {} form.", self.display_name)
    }

    pub fn update_failed_text(&self) -> String {
        format!("Error updating {}", self.display_name)
    }
}

pub static ACCOUNT: EntityConfig = EntityConfig {
    kind: EntityKind::Account,
    entity_name: "account",
    display_name: "account",
    list_endpoint: "/account/list/",
    create_endpoint: Some("/account/create/"),
    modal_element_id: "addAccountModal",
    form_element_id: "account-form",
    field_error_prefix: "id_account_",
    edit_button_class: Some("btn-edit_account"),
    delete_button_class: "btn-delete_account",
    trade_side: None,
};

pub static TRANSACTION: EntityConfig = EntityConfig {
    kind: EntityKind::Transaction,
    entity_name: "transaction",
    display_name: "transaction",
    list_endpoint: "/transaction/list/",
    create_endpoint: Some("/transaction/create/"),
    modal_element_id: "addTransactionModal",
    form_element_id: "transaction-form",
    field_error_prefix: "id_transaction_",
    edit_button_class: Some("btn-edit-transaction"),
    delete_button_class: "btn-delete-transaction",
    trade_side: None,
};

pub static SECURITY: EntityConfig = EntityConfig {
    kind: EntityKind::Security,
    entity_name: "security",
    display_name: "security",
    list_endpoint: "/security/list/",
    create_endpoint: None,
    modal_element_id: "tickerSearchModal",
    form_element_id: "security-form",
    field_error_prefix: "id_security_",
    edit_button_class: None,
    delete_button_class: "btn-delete-security",
    trade_side: None,
};

pub static TRADE_ENTRY: EntityConfig = EntityConfig {
    kind: EntityKind::TradeEntry,
    entity_name: "entry",
    display_name: "entry",
    list_endpoint: "/entry/list/",
    create_endpoint: Some("/entry/create/"),
    modal_element_id: "addEntryModal",
    form_element_id: "entry-form",
    field_error_prefix: "id_entry_",
    edit_button_class: Some("btn-edit_entry"),
    delete_button_class: "btn-delete-entry",
    trade_side: Some(TradeSide::Entry),
};

pub static TRADE_EXIT: EntityConfig = EntityConfig {
    kind: EntityKind::TradeExit,
    entity_name: "exit",
    display_name: "exit",
    list_endpoint: "/exit/list/",
    create_endpoint: Some("/exit/create/"),
    modal_element_id: "addExitModal",
    form_element_id: "exit-form",
    field_error_prefix: "id_exit_",
    edit_button_class: Some("btn-edit_exit"),
    delete_button_class: "btn-delete-exit",
    trade_side: Some(TradeSide::Exit),
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_templates() {
        assert_eq!(ACCOUNT.delete_endpoint(7), "/api/account/7/");
        assert_eq!(TRANSACTION.delete_endpoint(12), "/api/transaction/12/");
        assert_eq!(TRADE_ENTRY.edit_endpoint(3), "/entry/edit/3/");
        assert_eq!(TRADE_EXIT.edit_endpoint(44), "/exit/edit/44/");
        assert_eq!(SECURITY.delete_endpoint(1), "/api/security/1/");
        assert_eq!(ACCOUNT.create_endpoint, Some("/account/create/"));
        assert_eq!(SECURITY.create_endpoint, None);
    }

    #[test]
    fn test_field_input_ids() {
        assert_eq!(TRADE_ENTRY.field_input_id("quantity"), "id_entry_quantity");
        assert_eq!(ACCOUNT.field_input_id("currency"), "id_account_currency");
        assert_eq!(TRANSACTION.field_input_id("amount"), "id_transaction_amount");
    }

    #[test]
    fn test_table_is_complete_and_unique() {
        let mut names: Vec<&str> = EntityKind::ALL
            .iter()
            .map(|k| k.config().entity_name)
            .collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), 5);

        for kind in EntityKind::ALL {
            assert_eq!(kind.config().kind, kind);
        }
    }

    #[test]
    fn test_only_trade_forms_recalculate() {
        assert_eq!(TRADE_ENTRY.trade_side, Some(TradeSide::Entry));
        assert_eq!(TRADE_EXIT.trade_side, Some(TradeSide::Exit));
        assert_eq!(ACCOUNT.trade_side, None);
        assert_eq!(TRANSACTION.trade_side, None);
        assert_eq!(SECURITY.trade_side, None);
    }

    #[test]
    fn test_user_facing_texts() {
        assert_eq!(
            TRADE_ENTRY.confirm_delete_text(),
            "Are you sure you want to delete this entry?"
        );
        assert_eq!(ACCOUNT.delete_failed_text(), "Failed to delete account.");
        assert_eq!(
            TRANSACTION.load_form_failed_text(),
            "Could not load transaction form."
        );
        assert_eq!(TRADE_EXIT.update_failed_text(), "Error updating exit");
    }
}
