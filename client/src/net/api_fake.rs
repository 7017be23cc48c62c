//! In-memory [`CatalogApi`] that records every call it receives.

use std::cell::RefCell;

use super::{CatalogApi, ConsoleError};
use crate::net::types::{AccountProfile, AccountUser, Credentials, LoginResponse, NewAccount, NewProduct, Product, ResearchReport};

pub(crate) struct RecordingApi {
    pub login: Result<LoginResponse, ConsoleError>,
    pub products: Result<Vec<Product>, ConsoleError>,
    pub mine: Result<Vec<Product>, ConsoleError>,
    pub accounts: Result<Vec<AccountProfile>, ConsoleError>,
    pub report: Result<ResearchReport, ConsoleError>,
    calls: RefCell<Vec<String>>,
}

impl RecordingApi {
    pub fn new() -> Self {
        Self {
            login: Err(ConsoleError::Auth { status: 401 }),
            products: Ok(Vec::new()),
            mine: Ok(Vec::new()),
            accounts: Ok(Vec::new()),
            report: Err(ConsoleError::Network("no report".to_owned())),
            calls: RefCell::new(Vec::new()),
        }
    }

    pub fn with_login(mut self, access: &str, is_superuser: bool) -> Self {
        self.login = Ok(LoginResponse { access: access.to_owned(), is_superuser, rest: serde_json::Map::new() });
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    fn record(&self, call: String) {
        self.calls.borrow_mut().push(call);
    }
}

pub(crate) fn product(id: i64, name: &str) -> Product {
    Product { id, name: name.to_owned(), description: None, review_image: None }
}

impl CatalogApi for RecordingApi {
    async fn obtain_token(&self, credentials: &Credentials) -> Result<LoginResponse, ConsoleError> {
        self.record(format!("token {}", credentials.username));
        self.login.clone()
    }

    async fn list_products(&self, token: &str) -> Result<Vec<Product>, ConsoleError> {
        self.record(format!("list_products {token}"));
        self.products.clone()
    }

    async fn create_product(&self, token: &str, new: &NewProduct) -> Result<Product, ConsoleError> {
        self.record(format!("create_product {token} {}", new.name));
        Ok(Product { id: 99, name: new.name.clone(), description: Some(new.description.clone()), review_image: None })
    }

    async fn rename_product(&self, token: &str, id: i64, name: &str) -> Result<Product, ConsoleError> {
        self.record(format!("rename_product {token} {id} {name}"));
        Ok(product(id, name))
    }

    async fn research_product(&self, token: &str, id: i64) -> Result<ResearchReport, ConsoleError> {
        self.record(format!("research_product {token} {id}"));
        self.report.clone()
    }

    async fn list_accounts(&self, token: &str) -> Result<Vec<AccountProfile>, ConsoleError> {
        self.record(format!("list_accounts {token}"));
        self.accounts.clone()
    }

    async fn create_account(&self, token: &str, account: &NewAccount) -> Result<AccountProfile, ConsoleError> {
        self.record(format!("create_account {token} {}", account.user.username));
        Ok(AccountProfile {
            id: 50,
            user: AccountUser { id: 51, username: account.user.username.clone(), email: account.user.email.clone() },
            telephone: account.telephone.clone(),
            products: Vec::new(),
        })
    }

    async fn fetch_me(&self, token: &str) -> Result<AccountProfile, ConsoleError> {
        self.record(format!("fetch_me {token}"));
        self.mine.clone().map(|products| AccountProfile {
            id: 1,
            user: AccountUser { id: 1, username: "alice".to_owned(), email: String::new() },
            telephone: String::new(),
            products,
        })
    }

    async fn add_product(&self, token: &str, id: i64) -> Result<(), ConsoleError> {
        self.record(format!("add_product {token} {id}"));
        Ok(())
    }

    async fn remove_product(&self, token: &str, id: i64) -> Result<(), ConsoleError> {
        self.record(format!("remove_product {token} {id}"));
        Ok(())
    }
}
