//! Typed wrappers for the non-list admin endpoints

use crate::http::HttpClient;
use crate::page::{ListResponse, ResourcePage};
use leo_core::types::{
    Admin, AdminPageStats, Business, EnrollmentStatus, PayoutItem, ReferralProfile, Review,
    WalletBalance,
};
use leo_core::{Error, Result};
use reqwest::Method;
use serde::{Deserialize, Serialize};
use tracing::info;

/// Partial update for a business record
///
/// Only set fields are serialized, so the body carries exactly the changes.
#[derive(Debug, Clone, Default, Serialize)]
pub struct BusinessUpdate {
    /// Public-directory visibility
    #[serde(skip_serializing_if = "Option::is_none")]
    pub approved: Option<bool>,

    /// Promoted placement
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_featured: Option<bool>,

    /// Subscription fee settled
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_paid: Option<bool>,

    /// Display name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Listing description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Status update for a referral profile
#[derive(Debug, Clone, Default, Serialize)]
pub struct ReferralProfileUpdate {
    /// New enrollment status
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enrollment_status: Option<EnrollmentStatus>,

    /// Approval timestamp, set alongside an approval
    #[serde(skip_serializing_if = "Option::is_none")]
    pub approved_at: Option<chrono::DateTime<chrono::Utc>>,

    /// Rejection timestamp, set alongside a rejection
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rejected_at: Option<chrono::DateTime<chrono::Utc>>,

    /// Admin notes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Payload for creating a review on a business's behalf
#[derive(Debug, Clone, Serialize)]
pub struct NewReview {
    /// Reviewed business
    pub business_id: String,

    /// Review author
    pub user_id: String,

    /// Review text
    pub comment: String,

    /// Star rating
    pub rating: u8,

    /// Created pre-approved (admin entry)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub approved: Option<bool>,
}

/// Acknowledgement returned by the payout execution endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct PayoutReceipt {
    /// `"ok"` on success
    pub status: String,
}

#[derive(Debug, Serialize)]
struct PayoutRequest<'a> {
    items: &'a [PayoutItem],
}

/// Typed access to the admin endpoints the dashboard uses outside list views
#[derive(Debug, Clone)]
pub struct AdminApi {
    http: HttpClient,
}

impl AdminApi {
    /// Wrap an authenticated transport
    #[must_use]
    pub const fn new(http: HttpClient) -> Self {
        Self { http }
    }

    /// The underlying transport
    #[must_use]
    pub const fn http(&self) -> &HttpClient {
        &self.http
    }

    /// Fetch the signed-in admin and cache it on the session
    ///
    /// Called once at session start; the cached record gates admin-only
    /// views until logout.
    ///
    /// # Errors
    ///
    /// Returns an error if the account is not an admin or the request fails.
    pub async fn establish_session(&self) -> Result<Admin> {
        let admin: Admin = self.http.get_json("admins/auth", &[]).await?;
        info!(auth_id = %admin.auth_id, "admin session established");
        self.http.session().set_admin(admin.clone());
        Ok(admin)
    }

    /// Fetch a specific admin record
    ///
    /// # Errors
    ///
    /// Returns an error if the record does not exist or the request fails.
    pub async fn get_admin(&self, auth_id: &str) -> Result<Admin> {
        self.http.get_json(&format!("admins/{auth_id}"), &[]).await
    }

    /// Aggregate counters for the dashboard landing page
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn get_stats(&self) -> Result<AdminPageStats> {
        self.http.get_json("admins/stats", &[]).await
    }

    /// Update a business record (admin-scoped, PUT with partial body)
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn update_business(&self, auth_id: &str, update: &BusinessUpdate) -> Result<Business> {
        self.http
            .send_json(
                Method::PUT,
                &format!("admins/businesses/{auth_id}"),
                Some(update),
            )
            .await
    }

    /// Update a referral profile's status, timestamps, or notes
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn update_referral_status(
        &self,
        auth_id: &str,
        update: &ReferralProfileUpdate,
    ) -> Result<ReferralProfile> {
        self.http
            .send_json(
                Method::PATCH,
                &format!("referralProfiles/{auth_id}"),
                Some(update),
            )
            .await
    }

    /// Fetch a single referral profile
    ///
    /// # Errors
    ///
    /// Returns an error if the profile does not exist or the request fails.
    pub async fn get_referral_profile(&self, auth_id: &str) -> Result<ReferralProfile> {
        self.http
            .get_json(&format!("referralProfiles/{auth_id}"), &[])
            .await
    }

    /// Outstanding wallet balances (only those above zero), enveloped
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn pending_balances(
        &self,
        page: u32,
        limit: u32,
    ) -> Result<ResourcePage<WalletBalance>> {
        let query = vec![
            ("page".to_string(), page.max(1).to_string()),
            ("limit".to_string(), limit.max(1).to_string()),
        ];
        let response: ListResponse<WalletBalance> =
            self.http.get_json("payouts/balances", &query).await?;
        Ok(response.into_page(page.max(1), limit.max(1)))
    }

    /// Execute payouts for the given balances
    ///
    /// The backend performs the transfers; this returns whether it
    /// acknowledged the batch.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails. An empty batch is rejected
    /// client-side.
    pub async fn execute_payouts(&self, items: &[PayoutItem]) -> Result<bool> {
        if items.is_empty() {
            return Err(Error::Validation {
                field: "items".to_string(),
                message: "payout batch is empty".to_string(),
            });
        }

        let receipt: PayoutReceipt = self
            .http
            .send_json(Method::POST, "payouts", Some(&PayoutRequest { items }))
            .await?;

        info!(count = items.len(), status = %receipt.status, "payout batch submitted");
        Ok(receipt.status == "ok")
    }

    /// Reviews left on a business (legacy bare-array endpoint)
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn reviews_for_business(&self, business_id: &str) -> Result<Vec<Review>> {
        self.http
            .get_json(&format!("reviews/{business_id}"), &[])
            .await
    }

    /// Reviews written by a user (legacy bare-array endpoint)
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn reviews_for_user(&self, user_id: &str) -> Result<Vec<Review>> {
        self.http
            .get_json(&format!("reviews/user/{user_id}"), &[])
            .await
    }

    /// Create a review
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn create_review(&self, review: &NewReview) -> Result<Review> {
        self.http
            .send_json(Method::POST, "reviews", Some(review))
            .await
    }
}
