//! Bindings for the admin collections
//!
//! One [`AdminResource`] implementation per list view, carrying the backend
//! path, the page size the dashboard uses for that view, and the item
//! addressing scheme. [`MutableRecord`] implementations enumerate exactly the
//! fields staff can toggle; everything else is read-only from the dashboard.

use crate::resource::{enum_text, parse_enum, AdminResource, FieldValue, ItemKey, MutableRecord};
use leo_core::types::{
    Booking, BookingStatus, Business, Coupon, EnrollmentStatus, FetchedProduct, FetchedSpecial,
    InviteStatus, PaymentStatus, ReferralInvite, ReferralProfile, Review, ServiceOffering,
    SpecialStatus, User, WalletBalance,
};
use reqwest::Method;

impl MutableRecord for Business {
    fn get_field(&self, name: &str) -> Option<FieldValue> {
        match name {
            "approved" => Some(FieldValue::Bool(self.approved)),
            "is_featured" => Some(FieldValue::Bool(self.is_featured)),
            "has_paid" => Some(FieldValue::Bool(self.has_paid)),
            _ => None,
        }
    }

    fn set_field(&mut self, name: &str, value: &FieldValue) -> bool {
        match (name, value) {
            ("approved", FieldValue::Bool(b)) => {
                self.approved = *b;
                true
            }
            ("is_featured", FieldValue::Bool(b)) => {
                self.is_featured = *b;
                true
            }
            ("has_paid", FieldValue::Bool(b)) => {
                self.has_paid = *b;
                true
            }
            _ => false,
        }
    }
}

impl MutableRecord for User {
    fn get_field(&self, name: &str) -> Option<FieldValue> {
        match name {
            "is_deleted" => Some(FieldValue::Bool(self.is_deleted)),
            _ => None,
        }
    }

    fn set_field(&mut self, name: &str, value: &FieldValue) -> bool {
        match (name, value) {
            ("is_deleted", FieldValue::Bool(b)) => {
                self.is_deleted = *b;
                true
            }
            _ => false,
        }
    }
}

impl MutableRecord for FetchedProduct {
    fn get_field(&self, name: &str) -> Option<FieldValue> {
        match name {
            "approved" => Some(FieldValue::Bool(self.product.approved)),
            "hide_price" => Some(FieldValue::Bool(self.product.hide_price)),
            _ => None,
        }
    }

    fn set_field(&mut self, name: &str, value: &FieldValue) -> bool {
        match (name, value) {
            ("approved", FieldValue::Bool(b)) => {
                self.product.approved = *b;
                true
            }
            ("hide_price", FieldValue::Bool(b)) => {
                self.product.hide_price = *b;
                true
            }
            _ => false,
        }
    }
}

impl MutableRecord for FetchedSpecial {
    fn get_field(&self, name: &str) -> Option<FieldValue> {
        match name {
            "status" => enum_text(&self.special.status).map(FieldValue::Text),
            _ => None,
        }
    }

    fn set_field(&mut self, name: &str, value: &FieldValue) -> bool {
        match (name, value) {
            ("status", FieldValue::Text(text)) => match parse_enum::<SpecialStatus>(text) {
                Some(status) => {
                    self.special.status = status;
                    true
                }
                None => false,
            },
            _ => false,
        }
    }
}

impl MutableRecord for ServiceOffering {
    fn get_field(&self, name: &str) -> Option<FieldValue> {
        match name {
            "approved" => Some(FieldValue::Bool(self.approved)),
            "is_active" => Some(FieldValue::Bool(self.is_active)),
            _ => None,
        }
    }

    fn set_field(&mut self, name: &str, value: &FieldValue) -> bool {
        match (name, value) {
            ("approved", FieldValue::Bool(b)) => {
                self.approved = *b;
                true
            }
            ("is_active", FieldValue::Bool(b)) => {
                self.is_active = *b;
                true
            }
            _ => false,
        }
    }
}

impl MutableRecord for Review {
    fn get_field(&self, name: &str) -> Option<FieldValue> {
        match name {
            "approved" => Some(FieldValue::Bool(self.approved)),
            _ => None,
        }
    }

    fn set_field(&mut self, name: &str, value: &FieldValue) -> bool {
        match (name, value) {
            ("approved", FieldValue::Bool(b)) => {
                self.approved = *b;
                true
            }
            _ => false,
        }
    }
}

impl MutableRecord for Coupon {
    fn get_field(&self, name: &str) -> Option<FieldValue> {
        match name {
            "is_active" => Some(FieldValue::Bool(self.is_active)),
            _ => None,
        }
    }

    fn set_field(&mut self, name: &str, value: &FieldValue) -> bool {
        match (name, value) {
            ("is_active", FieldValue::Bool(b)) => {
                self.is_active = *b;
                true
            }
            _ => false,
        }
    }
}

impl MutableRecord for ReferralProfile {
    fn get_field(&self, name: &str) -> Option<FieldValue> {
        match name {
            "enrollment_status" => enum_text(&self.enrollment_status).map(FieldValue::Text),
            _ => None,
        }
    }

    fn set_field(&mut self, name: &str, value: &FieldValue) -> bool {
        match (name, value) {
            ("enrollment_status", FieldValue::Text(text)) => {
                match parse_enum::<EnrollmentStatus>(text) {
                    Some(status) => {
                        self.enrollment_status = status;
                        true
                    }
                    None => false,
                }
            }
            _ => false,
        }
    }
}

impl MutableRecord for ReferralInvite {
    fn get_field(&self, name: &str) -> Option<FieldValue> {
        match name {
            "status" => enum_text(&self.status).map(FieldValue::Text),
            _ => None,
        }
    }

    fn set_field(&mut self, name: &str, value: &FieldValue) -> bool {
        match (name, value) {
            ("status", FieldValue::Text(text)) => match parse_enum::<InviteStatus>(text) {
                Some(status) => {
                    self.status = status;
                    true
                }
                None => false,
            },
            _ => false,
        }
    }
}

impl MutableRecord for WalletBalance {
    // Balances are computed server-side; nothing is toggleable here
    fn get_field(&self, _name: &str) -> Option<FieldValue> {
        None
    }

    fn set_field(&mut self, _name: &str, _value: &FieldValue) -> bool {
        false
    }
}

impl MutableRecord for Booking {
    fn get_field(&self, name: &str) -> Option<FieldValue> {
        match name {
            "status" => enum_text(&self.status).map(FieldValue::Text),
            "payment_status" => enum_text(&self.payment_status).map(FieldValue::Text),
            _ => None,
        }
    }

    fn set_field(&mut self, name: &str, value: &FieldValue) -> bool {
        match (name, value) {
            ("status", FieldValue::Text(text)) => match parse_enum::<BookingStatus>(text) {
                Some(status) => {
                    self.status = status;
                    true
                }
                None => false,
            },
            ("payment_status", FieldValue::Text(text)) => {
                match parse_enum::<PaymentStatus>(text) {
                    Some(status) => {
                        self.payment_status = status;
                        true
                    }
                    None => false,
                }
            }
            _ => false,
        }
    }
}

/// Business listings, admin-scoped
#[derive(Debug, Clone, Copy)]
pub struct Businesses;

impl AdminResource for Businesses {
    type Item = Business;
    const NAME: &'static str = "businesses";
    const PAGE_SIZE: u32 = 10;

    fn list_path() -> String {
        "admins/businesses".to_string()
    }

    fn item_key(item: &Self::Item) -> ItemKey {
        ItemKey::Document(item.auth_id.clone())
    }

    fn mutate_path(key: &ItemKey) -> String {
        format!("admins/businesses/{key}")
    }

    // The admin business endpoint predates the PATCH convention
    fn mutate_method() -> Method {
        Method::PUT
    }
}

/// Platform users
#[derive(Debug, Clone, Copy)]
pub struct Users;

impl AdminResource for Users {
    type Item = User;
    const NAME: &'static str = "users";
    const PAGE_SIZE: u32 = 10;

    fn list_path() -> String {
        "users".to_string()
    }

    fn item_key(item: &Self::Item) -> ItemKey {
        ItemKey::Document(item.user_id.clone())
    }

    fn mutate_path(key: &ItemKey) -> String {
        format!("users/{key}")
    }
}

/// Products, flattened across businesses
#[derive(Debug, Clone, Copy)]
pub struct Products;

impl AdminResource for Products {
    type Item = FetchedProduct;
    const NAME: &'static str = "products";
    const PAGE_SIZE: u32 = 10;

    fn list_path() -> String {
        "businesses/products".to_string()
    }

    fn item_key(item: &Self::Item) -> ItemKey {
        ItemKey::Embedded {
            owner: item.business_auth_id.clone(),
            index: item.index,
        }
    }

    fn mutate_path(key: &ItemKey) -> String {
        match key {
            ItemKey::Document(id) => format!("businesses/products/{id}"),
            ItemKey::Embedded { owner, index } => {
                format!("businesses/{owner}/products/{index}")
            }
        }
    }
}

/// Bookable services
#[derive(Debug, Clone, Copy)]
pub struct Services;

impl AdminResource for Services {
    type Item = ServiceOffering;
    const NAME: &'static str = "services";
    const PAGE_SIZE: u32 = 10;

    fn list_path() -> String {
        "services".to_string()
    }

    fn item_key(item: &Self::Item) -> ItemKey {
        ItemKey::Document(item.id.clone())
    }

    fn mutate_path(key: &ItemKey) -> String {
        format!("services/{key}")
    }
}

/// Special offers, flattened across businesses
#[derive(Debug, Clone, Copy)]
pub struct Specials;

impl AdminResource for Specials {
    type Item = FetchedSpecial;
    const NAME: &'static str = "specials";
    const PAGE_SIZE: u32 = 10;

    fn list_path() -> String {
        "businesses/specials".to_string()
    }

    fn item_key(item: &Self::Item) -> ItemKey {
        ItemKey::Embedded {
            owner: item.auth_id.clone(),
            index: item.index,
        }
    }

    fn mutate_path(key: &ItemKey) -> String {
        match key {
            ItemKey::Document(id) => format!("businesses/specials/{id}"),
            ItemKey::Embedded { owner, index } => {
                format!("businesses/{owner}/specials/{index}")
            }
        }
    }
}

/// Customer reviews
#[derive(Debug, Clone, Copy)]
pub struct Reviews;

impl AdminResource for Reviews {
    type Item = Review;
    const NAME: &'static str = "reviews";
    const PAGE_SIZE: u32 = 10;

    fn list_path() -> String {
        "reviews".to_string()
    }

    fn item_key(item: &Self::Item) -> ItemKey {
        ItemKey::Document(item.id.clone())
    }

    fn mutate_path(key: &ItemKey) -> String {
        format!("reviews/{key}")
    }
}

/// Promotional coupons
#[derive(Debug, Clone, Copy)]
pub struct Coupons;

impl AdminResource for Coupons {
    type Item = Coupon;
    const NAME: &'static str = "coupons";
    const PAGE_SIZE: u32 = 10;

    fn list_path() -> String {
        "coupons".to_string()
    }

    fn item_key(item: &Self::Item) -> ItemKey {
        ItemKey::Document(item.id.clone())
    }

    fn mutate_path(key: &ItemKey) -> String {
        format!("coupons/{key}")
    }
}

/// Referral-program enrollments
#[derive(Debug, Clone, Copy)]
pub struct ReferralProfiles;

impl AdminResource for ReferralProfiles {
    type Item = ReferralProfile;
    const NAME: &'static str = "referralProfiles";
    const PAGE_SIZE: u32 = 20;

    fn list_path() -> String {
        "referralProfiles".to_string()
    }

    fn item_key(item: &Self::Item) -> ItemKey {
        // Profiles are addressed by account, not document id
        ItemKey::Document(item.auth_id.clone())
    }

    fn mutate_path(key: &ItemKey) -> String {
        format!("referralProfiles/{key}")
    }
}

/// Referral invites
#[derive(Debug, Clone, Copy)]
pub struct ReferralInvites;

impl AdminResource for ReferralInvites {
    type Item = ReferralInvite;
    const NAME: &'static str = "referralInvites";
    const PAGE_SIZE: u32 = 20;

    fn list_path() -> String {
        "referralInvites".to_string()
    }

    fn item_key(item: &Self::Item) -> ItemKey {
        ItemKey::Document(item.id.clone().unwrap_or_default())
    }

    fn mutate_path(key: &ItemKey) -> String {
        format!("referralInvites/{key}")
    }
}

/// Outstanding referral balances
#[derive(Debug, Clone, Copy)]
pub struct PayoutBalances;

impl AdminResource for PayoutBalances {
    type Item = WalletBalance;
    const NAME: &'static str = "payouts";
    const PAGE_SIZE: u32 = 20;

    fn list_path() -> String {
        "payouts/balances".to_string()
    }

    fn item_key(item: &Self::Item) -> ItemKey {
        ItemKey::Document(item.auth_id.clone())
    }

    fn mutate_path(key: &ItemKey) -> String {
        format!("payouts/balances/{key}")
    }
}

/// Service bookings
#[derive(Debug, Clone, Copy)]
pub struct Bookings;

impl AdminResource for Bookings {
    type Item = Booking;
    const NAME: &'static str = "bookings";
    const PAGE_SIZE: u32 = 10;

    fn list_path() -> String {
        "bookings".to_string()
    }

    fn item_key(item: &Self::Item) -> ItemKey {
        ItemKey::Document(item.id.clone())
    }

    fn mutate_path(key: &ItemKey) -> String {
        format!("bookings/{key}")
    }
}
