//! Admin and user view state, plus the loaders that fill it.
//!
//! DESIGN
//! ======
//! Loaders take the API and the bearer token explicitly and never touch the
//! session. A failed request leaves the affected list as it was and records a
//! notice; the other half of a load still applies.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

use crate::net::api::CatalogApi;
use crate::net::error::ConsoleError;
use crate::net::types::{AccountProfile, NewAccount, NewProduct, Product};
use crate::state::advert::FeatureSelection;
use crate::state::research::ResearchSummary;

/// State behind the admin view.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AdminViewState {
    pub products: Vec<Product>,
    pub accounts: Vec<AccountProfile>,
    pub product_draft: NewProduct,
    pub account_draft: NewAccount,
    /// Last failure shown on the notice line.
    pub notice: Option<String>,
}

/// State behind the user view.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UserViewState {
    /// The user's curated products.
    pub mine: Vec<Product>,
    /// Every product in the catalog.
    pub all: Vec<Product>,
    /// Product being renamed in the edit dialog.
    pub editing: Option<Product>,
    pub notice: Option<String>,
}

/// Both admin lists, each fetched independently.
#[derive(Debug)]
pub struct AdminLoad {
    pub products: Result<Vec<Product>, ConsoleError>,
    pub accounts: Result<Vec<AccountProfile>, ConsoleError>,
}

/// Both user lists, each fetched independently.
#[derive(Debug)]
pub struct UserLoad {
    pub mine: Result<Vec<Product>, ConsoleError>,
    pub all: Result<Vec<Product>, ConsoleError>,
}

pub async fn load_admin<A: CatalogApi>(api: &A, token: &str) -> AdminLoad {
    let products = api.list_products(token).await;
    let accounts = api.list_accounts(token).await;
    AdminLoad { products, accounts }
}

pub async fn load_user<A: CatalogApi>(api: &A, token: &str) -> UserLoad {
    let mine = api.fetch_me(token).await.map(|me| me.products);
    let all = api.list_products(token).await;
    UserLoad { mine, all }
}

/// Direction of a change to the user's product list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Membership {
    Add,
    Remove,
}

impl Membership {
    /// Notice-line label for a failed change.
    #[must_use]
    pub fn action(self) -> &'static str {
        match self {
            Self::Add => "Adding to your products",
            Self::Remove => "Removing product",
        }
    }
}

/// Add `id` to or remove it from the user's list, then fetch both lists again.
///
/// # Errors
///
/// Returns the add/remove failure; the lists are not reloaded in that case.
pub async fn change_membership<A: CatalogApi>(
    api: &A,
    token: &str,
    id: i64,
    change: Membership,
) -> Result<UserLoad, ConsoleError> {
    match change {
        Membership::Add => api.add_product(token, id).await?,
        Membership::Remove => api.remove_product(token, id).await?,
    }
    Ok(load_user(api, token).await)
}

/// Send the edit dialog's name. A blank name never leaves the browser.
///
/// # Errors
///
/// [`ConsoleError::ValidationGap`] for a blank name, otherwise the rename failure.
pub async fn save_rename<A: CatalogApi>(api: &A, token: &str, editing: &Product) -> Result<Product, ConsoleError> {
    let name = editing.name.trim();
    if name.is_empty() {
        return Err(ConsoleError::ValidationGap("Enter a product name."));
    }
    api.rename_product(token, editing.id, name).await
}

/// Fetch a research report and derive the dialog's summary and an empty
/// feature selection.
///
/// # Errors
///
/// Returns the research request failure.
pub async fn run_research<A: CatalogApi>(
    api: &A,
    token: &str,
    id: i64,
) -> Result<(ResearchSummary, FeatureSelection), ConsoleError> {
    let report = api.research_product(token, id).await?;
    Ok((ResearchSummary::from_report(&report), FeatureSelection::new(&report.features)))
}

/// Create an account, then fetch both admin lists again.
///
/// # Errors
///
/// Returns the create failure; the lists are not reloaded in that case.
pub async fn create_account_and_reload<A: CatalogApi>(
    api: &A,
    token: &str,
    account: &NewAccount,
) -> Result<AdminLoad, ConsoleError> {
    let created = api.create_account(token, account).await?;
    leptos::logging::log!("user {} created", created.user.username);
    Ok(load_admin(api, token).await)
}

/// Record a failed action on a notice line and in the console log.
pub fn note_failure(notice: &mut Option<String>, action: &str, err: &ConsoleError) {
    leptos::logging::warn!("{action} failed: {err}");
    *notice = Some(err.notice(action));
}

impl AdminViewState {
    pub fn apply_load(&mut self, load: AdminLoad) {
        self.notice = None;
        match load.products {
            Ok(products) => self.products = products,
            Err(e) => note_failure(&mut self.notice, "Loading products", &e),
        }
        match load.accounts {
            Ok(accounts) => self.accounts = accounts,
            Err(e) => note_failure(&mut self.notice, "Loading users", &e),
        }
    }

    /// Trimmed copy of the product draft, or a validation gap when a required
    /// field is blank.
    ///
    /// # Errors
    ///
    /// Returns [`ConsoleError::ValidationGap`] if name or description is blank.
    pub fn validated_product(&self) -> Result<NewProduct, ConsoleError> {
        let name = self.product_draft.name.trim();
        let description = self.product_draft.description.trim();
        if name.is_empty() || description.is_empty() {
            return Err(ConsoleError::ValidationGap("Enter a product name and description."));
        }
        Ok(NewProduct { name: name.to_owned(), description: description.to_owned() })
    }

    /// # Errors
    ///
    /// Returns [`ConsoleError::ValidationGap`] if username or password is blank.
    pub fn validated_account(&self) -> Result<NewAccount, ConsoleError> {
        let mut account = self.account_draft.clone();
        account.user.username = account.user.username.trim().to_owned();
        account.user.email = account.user.email.trim().to_owned();
        account.telephone = account.telephone.trim().to_owned();
        if account.user.username.is_empty() || account.user.password.is_empty() {
            return Err(ConsoleError::ValidationGap("Enter a username and password."));
        }
        Ok(account)
    }

    pub fn reset_product_draft(&mut self) {
        self.product_draft = NewProduct::default();
    }

    pub fn reset_account_draft(&mut self) {
        self.account_draft = NewAccount::default();
    }
}

impl UserViewState {
    pub fn apply_load(&mut self, load: UserLoad) {
        self.notice = None;
        match load.mine {
            Ok(mine) => self.mine = mine,
            Err(e) => note_failure(&mut self.notice, "Loading your products", &e),
        }
        match load.all {
            Ok(all) => self.all = all,
            Err(e) => note_failure(&mut self.notice, "Loading all products", &e),
        }
    }

    pub fn begin_edit(&mut self, product: &Product) {
        self.editing = Some(product.clone());
    }

    pub fn set_edit_name(&mut self, name: String) {
        if let Some(editing) = self.editing.as_mut() {
            editing.name = name;
        }
    }

    pub fn cancel_edit(&mut self) {
        self.editing = None;
    }

    /// Apply a confirmed rename to both lists and close the edit dialog.
    pub fn apply_rename(&mut self, id: i64, name: &str) {
        for product in self.mine.iter_mut().chain(self.all.iter_mut()) {
            if product.id == id {
                name.clone_into(&mut product.name);
            }
        }
        self.editing = None;
    }

    /// Whether `id` is already in the user's list.
    #[must_use]
    pub fn owns(&self, id: i64) -> bool {
        self.mine.iter().any(|p| p.id == id)
    }
}
