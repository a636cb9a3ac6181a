//! Sample backend payloads for integration tests

use serde_json::{json, Value};

/// Wrap rows in the standard list envelope
pub fn envelope(page: u32, limit: u32, total: u64, data: Vec<Value>) -> Value {
    let pages = total.div_ceil(u64::from(limit.max(1))).max(1);
    json!({
        "page": page,
        "limit": limit,
        "total": total,
        "pages": pages,
        "data": data,
    })
}

/// A business row as the admin list endpoint returns it
pub fn business_json(auth_id: &str, name: &str, approved: bool) -> Value {
    json!({
        "business_id": format!("b_{auth_id}"),
        "auth_id": auth_id,
        "name": name,
        "category_id": "cat_services",
        "subcategory_id": null,
        "description": "Fixture business",
        "display_image_url": null,
        "contact_email": format!("{auth_id}@example.com"),
        "phone": "868-555-0100",
        "approved": approved,
        "is_featured": false,
        "has_paid": true,
        "is_subscribed": false,
        "views_count": 10,
        "reviews_count": 2,
        "created_at": "2025-01-01T00:00:00Z",
        "updated_at": "2025-06-01T00:00:00Z",
    })
}

/// A page of sequentially named businesses
pub fn business_rows(count: usize, offset: usize) -> Vec<Value> {
    (0..count)
        .map(|i| {
            let n = offset + i;
            business_json(&format!("uid_{n}"), &format!("Business {n}"), false)
        })
        .collect()
}

/// A user row for the legacy bare-array endpoint
pub fn user_json(user_id: &str, email: &str) -> Value {
    json!({
        "user_id": user_id,
        "auth_id": format!("auth_{user_id}"),
        "first_name": "Test",
        "last_name": "User",
        "username": user_id,
        "email": email,
        "phone": null,
        "area": "Port of Spain",
        "display_picture_url": null,
        "role": {"business": false, "customer": true},
        "is_deleted": false,
        "last_login": null,
        "created_at": "2025-02-01T00:00:00Z",
    })
}

/// A referral profile row
pub fn referral_profile_json(auth_id: &str, status: &str) -> Value {
    json!({
        "_id": format!("rp_{auth_id}"),
        "auth_id": auth_id,
        "legal_name": "Jordan Ali",
        "contact_email": format!("{auth_id}@example.com"),
        "bank": {
            "account_name": "Jordan Ali",
            "account_number": "000123456789",
            "bank_name": "First Citizens",
            "branch": "Port of Spain",
            "account_type": "checking",
        },
        "enrollment_status": status,
        "referral_code": null,
        "enrolled_at": "2025-04-01T00:00:00Z",
        "approved_at": null,
        "rejected_at": null,
        "notes": null,
    })
}

/// An outstanding wallet balance with its joined profile
pub fn wallet_balance_json(auth_id: &str, balance: f64) -> Value {
    json!({
        "auth_id": auth_id,
        "current_balance": balance,
        "lifetime_earnings": balance * 4.0,
        "last_payout_at": null,
        "referral_profile": referral_profile_json(auth_id, "approved"),
    })
}

/// The signed-in admin record
pub fn admin_json(auth_id: &str) -> Value {
    json!({
        "auth_id": auth_id,
        "name": "Dana Admin",
        "email": "dana@leo.example.com",
    })
}
