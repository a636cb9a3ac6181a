//! Core data types for the Leo business directory

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Identity-provider account identifier
pub type AuthId = String;

/// Backend document identifier
pub type DocumentId = String;

/// Referral enrollment status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum EnrollmentStatus {
    /// Awaiting admin review
    Pending,
    /// Enrollment approved
    Approved,
    /// Enrollment rejected
    Rejected,
}

impl Default for EnrollmentStatus {
    fn default() -> Self {
        Self::Pending
    }
}

impl std::fmt::Display for EnrollmentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pending => write!(f, "pending"),
            Self::Approved => write!(f, "approved"),
            Self::Rejected => write!(f, "rejected"),
        }
    }
}

/// Referral invite lifecycle status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum InviteStatus {
    /// Created but not yet sent
    Draft,
    /// Invite email delivered
    Sent,
    /// Invitee signed up
    Accepted,
    /// Invite lapsed before acceptance
    Expired,
    /// Referral reward granted
    Rewarded,
    /// Withdrawn by the referrer or an admin
    Cancelled,
}

impl std::fmt::Display for InviteStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Draft => write!(f, "draft"),
            Self::Sent => write!(f, "sent"),
            Self::Accepted => write!(f, "accepted"),
            Self::Expired => write!(f, "expired"),
            Self::Rewarded => write!(f, "rewarded"),
            Self::Cancelled => write!(f, "cancelled"),
        }
    }
}

/// Special-offer status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SpecialStatus {
    /// Visible to customers
    Active,
    /// Past its run
    Expired,
    /// Awaiting approval
    Pending,
}

impl std::fmt::Display for SpecialStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Active => write!(f, "active"),
            Self::Expired => write!(f, "expired"),
            Self::Pending => write!(f, "pending"),
        }
    }
}

/// What a special offer discounts
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SpecialKind {
    /// A product offer
    Product,
    /// A service offer
    Service,
}

/// Booking lifecycle status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum BookingStatus {
    /// Requested, not yet confirmed by the business
    Pending,
    /// Confirmed by the business
    Confirmed,
    /// Cancelled by either party
    Cancelled,
    /// Service delivered
    Completed,
}

impl std::fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pending => write!(f, "pending"),
            Self::Confirmed => write!(f, "confirmed"),
            Self::Cancelled => write!(f, "cancelled"),
            Self::Completed => write!(f, "completed"),
        }
    }
}

/// Booking payment status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    /// No payment taken
    Unpaid,
    /// Payment captured
    Paid,
    /// Payment returned
    Refunded,
    /// Capture attempt failed
    Failed,
}

impl std::fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unpaid => write!(f, "unpaid"),
            Self::Paid => write!(f, "paid"),
            Self::Refunded => write!(f, "refunded"),
            Self::Failed => write!(f, "failed"),
        }
    }
}

/// What a coupon applies to
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CouponKind {
    /// Subscription fee discount
    Subscription,
    /// Special-offer placement discount
    Specials,
    /// Featured-listing discount
    Featured,
    /// Message-blast credit
    MessageBlast,
}

/// How a coupon discount is computed
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DiscountKind {
    /// Percentage off
    Percentage,
    /// Flat amount off
    Flat,
}

/// Sort orders accepted by the business list endpoint
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SortBy {
    /// Most recently created first
    Recent,
    /// Most viewed first
    Views,
    /// Alphabetical by name
    Name,
}

impl std::fmt::Display for SortBy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Recent => write!(f, "recent"),
            Self::Views => write!(f, "views"),
            Self::Name => write!(f, "name"),
        }
    }
}

/// Supported billing currencies
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Currency {
    /// Trinidad and Tobago dollar
    TTD,
    /// United States dollar
    USD,
}

/// A business listing
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct Business {
    /// Backend document id
    pub business_id: DocumentId,

    /// Identity-provider account of the owner
    pub auth_id: AuthId,

    /// Display name
    #[validate(length(min = 1, max = 255))]
    pub name: String,

    /// Category reference
    pub category_id: Option<String>,

    /// Subcategory reference
    pub subcategory_id: Option<String>,

    /// Short description shown on the listing
    pub description: Option<String>,

    /// Profile image URL
    pub display_image_url: Option<String>,

    /// Contact email shown to staff
    #[validate(email)]
    pub contact_email: String,

    /// Contact phone
    pub phone: Option<String>,

    /// Visible in the public directory
    pub approved: bool,

    /// Promoted placement
    pub is_featured: bool,

    /// Subscription fee settled
    pub has_paid: bool,

    /// Active platform subscription
    #[serde(default)]
    pub is_subscribed: bool,

    /// Listing view counter
    #[serde(default)]
    pub views_count: i64,

    /// Review counter
    #[serde(default)]
    pub reviews_count: i64,

    /// When the listing was created
    pub created_at: DateTime<Utc>,

    /// Last modification time
    pub updated_at: DateTime<Utc>,
}

/// Customer/business role flags on a user account
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserRole {
    /// Account can act as a business
    pub business: bool,
    /// Account can act as a customer
    pub customer: bool,
}

/// A platform user
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct User {
    /// Backend document id
    pub user_id: DocumentId,

    /// Identity-provider account id
    pub auth_id: AuthId,

    /// First name
    pub first_name: Option<String>,

    /// Last name
    pub last_name: Option<String>,

    /// Public handle
    pub username: Option<String>,

    /// Account email
    #[validate(email)]
    pub email: String,

    /// Contact phone
    pub phone: Option<String>,

    /// Home area used for local results
    pub area: Option<String>,

    /// Avatar URL
    pub display_picture_url: Option<String>,

    /// Role flags
    #[serde(default)]
    pub role: UserRole,

    /// Soft-deletion marker
    #[serde(default)]
    pub is_deleted: bool,

    /// Last sign-in time
    pub last_login: Option<DateTime<Utc>>,

    /// Account creation time
    pub created_at: DateTime<Utc>,
}

/// A product embedded in a business document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    /// Product name
    pub name: String,

    /// Description shown on the listing
    pub description: Option<String>,

    /// Image URL
    pub display_image_url: Option<String>,

    /// Price in the business currency
    pub price: f64,

    /// Hide the price on the public listing
    #[serde(default)]
    pub hide_price: bool,

    /// Visible on the public listing
    pub approved: bool,

    /// When the product was added
    pub created_at: DateTime<Utc>,

    /// Last modification time
    pub updated_at: DateTime<Utc>,
}

/// A product row flattened for the admin list, keyed back to its owner
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FetchedProduct {
    /// The embedded product
    pub product: Product,

    /// Owning business account
    pub business_auth_id: AuthId,

    /// Position within the owning business document
    pub index: usize,

    /// Owning business display name
    pub business_name: Option<String>,
}

/// A bookable service offered by a business
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceOffering {
    /// Backend document id
    #[serde(rename = "_id")]
    pub id: DocumentId,

    /// Owning business account
    pub business_auth_id: AuthId,

    /// Service name
    pub name: String,

    /// Description shown to customers
    pub description: Option<String>,

    /// Appointment length
    pub duration_minutes: u32,

    /// Price per booking
    pub price: f64,

    /// Billing currency
    pub currency: Currency,

    /// Bookable right now
    pub is_active: bool,

    /// Image URL
    pub display_image_url: Option<String>,

    /// Approved for the public catalog
    #[serde(default)]
    pub approved: bool,

    /// When the service was created
    pub created_at: DateTime<Utc>,

    /// Last modification time
    pub updated_at: DateTime<Utc>,
}

/// A special offer embedded in a business document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Special {
    /// Offer headline
    pub title: String,

    /// Offer details
    pub description: Option<String>,

    /// Image URL
    pub image_url: Option<String>,

    /// Category reference
    pub category_id: Option<String>,

    /// Subcategory reference
    pub subcategory_id: Option<String>,

    /// Offer status
    pub status: SpecialStatus,

    /// What the offer discounts
    #[serde(rename = "type")]
    pub kind: SpecialKind,

    /// When the offer was created
    pub created_at: DateTime<Utc>,

    /// Last modification time
    pub updated_at: DateTime<Utc>,
}

/// A special-offer row flattened for the admin list, keyed back to its owner
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FetchedSpecial {
    /// The embedded offer
    pub special: Special,

    /// Owning business account
    pub auth_id: AuthId,

    /// Owning business document id
    pub business_id: DocumentId,

    /// Position within the owning business document
    pub index: usize,

    /// Owning business display name
    pub business_name: Option<String>,

    /// Owning business image URL
    pub business_image: Option<String>,
}

/// A customer review of a business
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct Review {
    /// Backend document id
    #[serde(rename = "_id")]
    pub id: DocumentId,

    /// Reviewed business
    pub business_id: DocumentId,

    /// Review author
    pub user_id: DocumentId,

    /// Review text
    pub comment: String,

    /// Star rating
    #[validate(range(min = 1, max = 5))]
    pub rating: u8,

    /// Visible on the public listing
    pub approved: bool,

    /// When the review was posted
    pub created_at: DateTime<Utc>,

    /// Last modification time
    pub updated_at: DateTime<Utc>,
}

/// A promotional coupon
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Coupon {
    /// Backend document id
    pub id: DocumentId,

    /// Coupon code shown to businesses
    pub name: String,

    /// What the coupon applies to
    pub coupon_type: CouponKind,

    /// Discount computation
    #[serde(rename = "type")]
    pub discount: DiscountKind,

    /// Percentage (0-100) or flat amount, per `discount`
    pub amount: f64,

    /// Redeemable right now
    pub is_active: bool,

    /// Expiry time
    pub expires_on: DateTime<Utc>,
}

/// How a payout is deposited
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum BankAccountType {
    /// Checking account
    Checking,
    /// Savings account
    Savings,
}

/// Bank deposit details on a referral profile
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BankDetails {
    /// Account holder name
    pub account_name: String,

    /// Account number
    pub account_number: String,

    /// Transit number, where the bank requires one
    #[serde(default)]
    pub transit_number: Option<String>,

    /// Bank name
    pub bank_name: String,

    /// Branch name
    pub branch: String,

    /// Account type
    pub account_type: BankAccountType,
}

/// A referral-program participant
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ReferralProfile {
    /// Backend document id
    #[serde(rename = "_id")]
    pub id: Option<DocumentId>,

    /// Identity-provider account id
    pub auth_id: AuthId,

    /// Legal name used for payouts
    pub legal_name: String,

    /// Contact email
    #[validate(email)]
    pub contact_email: String,

    /// Deposit details
    pub bank: BankDetails,

    /// Enrollment status
    pub enrollment_status: EnrollmentStatus,

    /// Assigned referral code, once approved
    #[serde(default)]
    pub referral_code: Option<String>,

    /// When the enrollment was submitted
    pub enrolled_at: DateTime<Utc>,

    /// When the enrollment was approved
    #[serde(default)]
    pub approved_at: Option<DateTime<Utc>>,

    /// When the enrollment was rejected
    #[serde(default)]
    pub rejected_at: Option<DateTime<Utc>>,

    /// Admin notes
    #[serde(default)]
    pub notes: Option<String>,
}

/// A referral invite
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReferralInvite {
    /// Backend document id
    #[serde(rename = "_id")]
    pub id: Option<DocumentId>,

    /// Referring account
    pub referrer_id: AuthId,

    /// Invitee email address
    pub invitee_email: String,

    /// Invitee account, once accepted
    #[serde(default)]
    pub invitee_auth_id: Option<AuthId>,

    /// Code embedded in the invite link
    pub invite_code: String,

    /// Lifecycle status
    pub status: InviteStatus,

    /// When the invite was sent
    pub sent_at: DateTime<Utc>,

    /// When the invitee accepted
    #[serde(default)]
    pub accepted_at: Option<DateTime<Utc>>,

    /// When the invite lapses
    pub expires_at: DateTime<Utc>,

    /// When the reward was granted
    #[serde(default)]
    pub rewarded_at: Option<DateTime<Utc>>,
}

/// An outstanding referral wallet balance, joined with its profile
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WalletBalance {
    /// Account the balance belongs to
    pub auth_id: AuthId,

    /// Amount currently owed
    pub current_balance: f64,

    /// All-time referral earnings
    pub lifetime_earnings: f64,

    /// Last payout execution time
    #[serde(default)]
    pub last_payout_at: Option<DateTime<Utc>>,

    /// Joined referral profile, where one exists
    #[serde(default)]
    pub referral_profile: Option<ReferralProfile>,
}

/// One line of a payout execution request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayoutItem {
    /// Account being paid
    pub auth_id: AuthId,

    /// Amount to pay out
    pub amount: f64,

    /// Admin account initiating the payout
    pub related_id: AuthId,
}

/// A service booking
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Booking {
    /// Backend document id
    #[serde(rename = "_id")]
    pub id: DocumentId,

    /// Booked service
    pub service_id: DocumentId,

    /// Business delivering the service
    pub business_auth_id: AuthId,

    /// Customer who booked
    pub customer_auth_id: AuthId,

    /// Appointment start
    pub start: DateTime<Utc>,

    /// Appointment end
    pub end: DateTime<Utc>,

    /// Amount charged
    pub amount: f64,

    /// Billing currency
    pub currency: Currency,

    /// Booking status
    pub status: BookingStatus,

    /// Payment status
    pub payment_status: PaymentStatus,

    /// Free-text notes
    #[serde(default)]
    pub notes: Option<String>,

    /// When the booking was created
    pub created_at: DateTime<Utc>,

    /// Last modification time
    pub updated_at: DateTime<Utc>,
}

/// A staff account with access to the dashboard
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Admin {
    /// Identity-provider account id
    pub auth_id: AuthId,

    /// Display name
    pub name: String,

    /// Account email
    pub email: String,
}

/// Aggregate counters for the dashboard landing page
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminPageStats {
    /// Registered users
    #[serde(rename = "totalUsers")]
    pub total_users: u64,

    /// Registered businesses
    #[serde(rename = "totalBusinesses")]
    pub total_businesses: u64,

    /// Products across all businesses
    #[serde(rename = "totalProducts")]
    pub total_products: u64,

    /// Services across all businesses
    #[serde(rename = "totalServices")]
    pub total_services: u64,

    /// Special offers across all businesses
    #[serde(rename = "totalSpecials")]
    pub total_specials: u64,
}
