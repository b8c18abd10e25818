//! Account role enums.
//!
//! Wire values match the account API exactly: `UserType` travels in
//! SCREAMING_SNAKE_CASE, the optional role refinements in snake_case.

use serde::{Deserialize, Serialize};

/// Primary account kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserType {
    #[default]
    Customer,
    Seller,
    Admin,
}

/// Shopping profile for customer accounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum CustomerCategory {
    FoodBuyer,
    ServiceSeeker,
    GroceryBuyer,
    #[default]
    General,
}

/// Permission scope for admin accounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdminRole {
    /// Full access to every platform console.
    SuperAdmin,
    /// Manages the category tree.
    CategoryManager,
    /// Manages customer and seller accounts.
    UserManager,
    /// Manages order flow.
    OrderManager,
}

/// Business kind for seller accounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SellerType {
    Restaurant,
    GroceryStore,
    ServiceProvider,
    GeneralSeller,
}

impl std::fmt::Display for UserType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Customer => write!(f, "CUSTOMER"),
            Self::Seller => write!(f, "SELLER"),
            Self::Admin => write!(f, "ADMIN"),
        }
    }
}

impl std::str::FromStr for UserType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "CUSTOMER" => Ok(Self::Customer),
            "SELLER" => Ok(Self::Seller),
            "ADMIN" => Ok(Self::Admin),
            _ => Err(format!("invalid user type: {s}")),
        }
    }
}

impl std::str::FromStr for CustomerCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "food_buyer" => Ok(Self::FoodBuyer),
            "service_seeker" => Ok(Self::ServiceSeeker),
            "grocery_buyer" => Ok(Self::GroceryBuyer),
            "general" => Ok(Self::General),
            _ => Err(format!("invalid customer category: {s}")),
        }
    }
}

impl std::str::FromStr for AdminRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "super_admin" => Ok(Self::SuperAdmin),
            "category_manager" => Ok(Self::CategoryManager),
            "user_manager" => Ok(Self::UserManager),
            "order_manager" => Ok(Self::OrderManager),
            _ => Err(format!("invalid admin role: {s}")),
        }
    }
}

impl std::str::FromStr for SellerType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "restaurant" => Ok(Self::Restaurant),
            "grocery_store" => Ok(Self::GroceryStore),
            "service_provider" => Ok(Self::ServiceProvider),
            "general_seller" => Ok(Self::GeneralSeller),
            _ => Err(format!("invalid seller type: {s}")),
        }
    }
}
