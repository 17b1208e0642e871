//! Backend source traits, wire DTOs, and the HTTP implementation.

use async_trait::async_trait;
use basket_commerce::cart::CartStore;
use basket_commerce::catalog::{Farmer, Item};
use basket_commerce::checkout::{Address, AddressRecord, Order, PlacedOrder};
use basket_commerce::ids::{FarmerId, ProductId, UserId};
use basket_commerce::Money;
use basket_data::FetchClient;
use serde::{Deserialize, Serialize};

use crate::config::BackendConfig;
use crate::error::StorefrontError;

/// One cart line as coupled into the address submission body.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SubmittedLine {
    /// Product in the cart.
    pub product_id: ProductId,
    /// Product name, denormalized for the backend's records.
    pub name: String,
    /// Requested quantity in kilograms.
    #[serde(rename = "quantity")]
    pub quantity_kg: u32,
    /// Unit price in minor units.
    #[serde(rename = "price")]
    pub unit_price: Money,
}

/// Body of `POST /api/addresses`: the address fields plus a snapshot of
/// every cart line with its resolved quantity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AddressSubmission {
    /// The address fields, flattened into the top-level object.
    #[serde(flatten)]
    pub address: Address,
    /// Cart lines at submission time.
    pub products: Vec<SubmittedLine>,
}

impl AddressSubmission {
    /// Couple an address with the current cart contents.
    pub fn from_cart(address: Address, cart: &CartStore) -> Self {
        let products = cart
            .lines()
            .iter()
            .map(|line| SubmittedLine {
                product_id: line.item.id.clone(),
                name: line.item.name.clone(),
                quantity_kg: line.quantity_kg,
                unit_price: line.item.unit_price,
            })
            .collect();
        Self { address, products }
    }
}

/// User record for the best-effort upsert after identity-provider login.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    /// Stable user identifier derived from the identity provider subject.
    pub user_id: UserId,
    /// Display name.
    pub name: String,
    /// Email address.
    pub email: String,
    /// Avatar URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub picture: Option<String>,
}

/// Read access to the product catalog.
#[async_trait]
pub trait CatalogSource {
    /// Fetch the full product list.
    async fn products(&self) -> Result<Vec<Item>, StorefrontError>;

    /// Fetch one farmer's profile.
    async fn farmer(&self, id: &FarmerId) -> Result<Farmer, StorefrontError>;
}

/// Write/read access to the backend persisting addresses, orders, and
/// users.
#[async_trait]
pub trait OrderSource {
    /// Submit the address step. On success the backend returns the
    /// persisted record, whose id the checkout threads into the order.
    async fn submit_address(
        &self,
        submission: &AddressSubmission,
    ) -> Result<AddressRecord, StorefrontError>;

    /// Fetch previously saved addresses, oldest first.
    async fn addresses(&self) -> Result<Vec<AddressRecord>, StorefrontError>;

    /// Place an order. Success yields an opaque order id for display.
    async fn submit_order(&self, order: &Order) -> Result<PlacedOrder, StorefrontError>;

    /// Upsert the user record after login.
    async fn upsert_user(&self, profile: &UserProfile) -> Result<(), StorefrontError>;
}

/// HTTP implementation of both sources against the real backend services.
pub struct HttpBackend {
    api: FetchClient,
    orders: FetchClient,
}

impl HttpBackend {
    /// Build clients for the configured base URLs.
    pub fn new(config: &BackendConfig) -> Self {
        Self {
            api: FetchClient::new().with_base_url(config.api_base.clone()),
            orders: FetchClient::new().with_base_url(config.orders_base.clone()),
        }
    }
}

#[async_trait]
impl CatalogSource for HttpBackend {
    async fn products(&self) -> Result<Vec<Item>, StorefrontError> {
        let resp = self.api.get("/api/products").send().await?;
        Ok(resp.error_for_status()?.json()?)
    }

    async fn farmer(&self, id: &FarmerId) -> Result<Farmer, StorefrontError> {
        let resp = self
            .api
            .get(format!("/api/farmers/{}", id))
            .send()
            .await?;
        Ok(resp.error_for_status()?.json()?)
    }
}

#[async_trait]
impl OrderSource for HttpBackend {
    async fn submit_address(
        &self,
        submission: &AddressSubmission,
    ) -> Result<AddressRecord, StorefrontError> {
        let resp = self
            .api
            .post("/api/addresses")
            .json(submission)?
            .send()
            .await?;
        Ok(resp.error_for_status()?.json()?)
    }

    async fn addresses(&self) -> Result<Vec<AddressRecord>, StorefrontError> {
        let resp = self.api.get("/api/addresses").send().await?;
        Ok(resp.error_for_status()?.json()?)
    }

    async fn submit_order(&self, order: &Order) -> Result<PlacedOrder, StorefrontError> {
        let resp = self.orders.post("/api/orders").json(order)?.send().await?;
        Ok(resp.error_for_status()?.json()?)
    }

    async fn upsert_user(&self, profile: &UserProfile) -> Result<(), StorefrontError> {
        let resp = self.api.post("/api/users").json(profile)?.send().await?;
        resp.error_for_status()?;
        Ok(())
    }
}
