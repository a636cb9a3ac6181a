//! `leo-admin`: staff CLI for the Leo business directory
//!
//! Each subcommand drives the same paginated controller the dashboard list
//! views use, so moderation from a terminal and from the web UI go through
//! identical client logic.

mod output;

use clap::{Args, Parser, Subcommand, ValueEnum};
use leo_client::resources::{
    Bookings, Businesses, Coupons, PayoutBalances, Products, ReferralInvites, ReferralProfiles,
    Reviews, Services, Specials, Users,
};
use leo_client::{
    AdminApi, AdminResource, AuthSession, FieldValue, FilterValue, HttpClient, ItemKey,
    ListController, ReferralProfileUpdate, StaticTokenProvider,
};
use leo_core::context_error::Result;
use leo_core::types::{EnrollmentStatus, PayoutItem};
use leo_core::utils::{format_amount, mask_account_number, truncate_label};
use leo_core::{context_error, init_logging, Config};
use std::sync::Arc;
use tracing::info;

#[derive(Debug, Parser)]
#[command(
    name = "leo-admin",
    version,
    about = "Moderation tooling for the Leo business directory"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

/// Collections addressable from the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ResourceKind {
    Businesses,
    Users,
    Products,
    Services,
    Specials,
    Reviews,
    Coupons,
    ReferralProfiles,
    ReferralInvites,
    Payouts,
    Bookings,
}

#[derive(Debug, Clone, Args)]
struct ListArgs {
    /// Page to fetch (1-based)
    #[arg(long, default_value_t = 1)]
    page: u32,

    /// Free-text search
    #[arg(long)]
    search: Option<String>,

    /// Filter as NAME=VALUE; repeatable. `true`/`false` toggle flags
    #[arg(long = "filter", value_name = "NAME=VALUE")]
    filters: Vec<String>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the signed-in admin account
    Whoami,

    /// Dashboard totals
    Stats,

    /// List one page of a collection
    List {
        /// Collection to list
        resource: ResourceKind,

        #[command(flatten)]
        args: ListArgs,
    },

    /// Set one field on one item (optimistic, confirmed with the server)
    Set {
        /// Collection the item belongs to
        resource: ResourceKind,

        /// Item key: a document id, or OWNER:INDEX for embedded items
        key: String,

        /// Field name (e.g. approved, is_featured, status)
        field: String,

        /// New value (`true`/`false` for flags, text for statuses)
        value: String,

        #[command(flatten)]
        args: ListArgs,
    },

    /// Approve or reject a referral enrollment
    Referral {
        /// Account to update
        auth_id: String,

        /// Reject instead of approve
        #[arg(long)]
        reject: bool,

        /// Admin notes to attach
        #[arg(long)]
        notes: Option<String>,
    },

    /// Execute payouts for the given accounts' outstanding balances
    Pay {
        /// Accounts to pay, as listed under `list payouts`
        auth_ids: Vec<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env if present (development convenience)
    if let Err(e) = dotenvy::dotenv() {
        eprintln!("Note: .env file not loaded: {e}");
    }

    init_logging()?;

    let config = Config::load().unwrap_or_else(|err| {
        info!("Failed to load config ({}), using defaults", err);
        Config::default()
    });

    let token = config.resolve_token()?;
    let session = Arc::new(AuthSession::new(Arc::new(StaticTokenProvider::new(token))));
    let http = HttpClient::new(&config.api, session)?;
    let api = AdminApi::new(http.clone());

    let cli = Cli::parse();
    match cli.command {
        Command::Whoami => {
            let admin = api.establish_session().await?;
            println!("{} <{}> ({})", admin.name, admin.email, admin.auth_id);
        }
        Command::Stats => {
            let stats = api.get_stats().await?;
            println!("Users:      {}", stats.total_users);
            println!("Businesses: {}", stats.total_businesses);
            println!("Products:   {}", stats.total_products);
            println!("Services:   {}", stats.total_services);
            println!("Specials:   {}", stats.total_specials);
        }
        Command::List { resource, args } => run_list(&http, resource, &args).await?,
        Command::Set {
            resource,
            key,
            field,
            value,
            args,
        } => run_set(&http, resource, &key, &field, &value, &args).await?,
        Command::Referral {
            auth_id,
            reject,
            notes,
        } => {
            let now = chrono::Utc::now();
            let update = if reject {
                ReferralProfileUpdate {
                    enrollment_status: Some(EnrollmentStatus::Rejected),
                    rejected_at: Some(now),
                    notes,
                    ..ReferralProfileUpdate::default()
                }
            } else {
                ReferralProfileUpdate {
                    enrollment_status: Some(EnrollmentStatus::Approved),
                    approved_at: Some(now),
                    notes,
                    ..ReferralProfileUpdate::default()
                }
            };

            let profile = api.update_referral_status(&auth_id, &update).await?;
            println!(
                "{}: {} ({})",
                profile.auth_id, profile.enrollment_status, profile.legal_name
            );
        }
        Command::Pay { auth_ids } => run_pay(&api, &auth_ids).await?,
    }

    Ok(())
}

/// Fetch one page through the list controller and print it
async fn run_list(http: &HttpClient, resource: ResourceKind, args: &ListArgs) -> Result<()> {
    match resource {
        ResourceKind::Businesses => {
            list_page::<Businesses>(
                http,
                args,
                &["Key", "Name", "Email", "Approved", "Featured", "Paid"],
                |b| {
                    vec![
                        b.auth_id.clone(),
                        truncate_label(&b.name, 32),
                        b.contact_email.clone(),
                        output::yes_no(b.approved).to_string(),
                        output::yes_no(b.is_featured).to_string(),
                        output::yes_no(b.has_paid).to_string(),
                    ]
                },
            )
            .await
        }
        ResourceKind::Users => {
            list_page::<Users>(
                http,
                args,
                &["Key", "Username", "Email", "Area", "Deleted"],
                |u| {
                    vec![
                        u.user_id.clone(),
                        u.username.clone().unwrap_or_else(|| "-".to_string()),
                        u.email.clone(),
                        u.area.clone().unwrap_or_else(|| "-".to_string()),
                        output::yes_no(u.is_deleted).to_string(),
                    ]
                },
            )
            .await
        }
        ResourceKind::Products => {
            list_page::<Products>(http, args, &["Key", "Name", "Price", "Approved"], |p| {
                vec![
                    format!("{}:{}", p.business_auth_id, p.index),
                    truncate_label(&p.product.name, 32),
                    format_amount(p.product.price),
                    output::yes_no(p.product.approved).to_string(),
                ]
            })
            .await
        }
        ResourceKind::Services => {
            list_page::<Services>(
                http,
                args,
                &["Key", "Name", "Price", "Minutes", "Active", "Approved"],
                |s| {
                    vec![
                        s.id.clone(),
                        truncate_label(&s.name, 32),
                        format_amount(s.price),
                        s.duration_minutes.to_string(),
                        output::yes_no(s.is_active).to_string(),
                        output::yes_no(s.approved).to_string(),
                    ]
                },
            )
            .await
        }
        ResourceKind::Specials => {
            list_page::<Specials>(
                http,
                args,
                &["Key", "Title", "Business", "Status"],
                |s| {
                    vec![
                        format!("{}:{}", s.auth_id, s.index),
                        truncate_label(&s.special.title, 32),
                        s.business_name.clone().unwrap_or_else(|| "-".to_string()),
                        s.special.status.to_string(),
                    ]
                },
            )
            .await
        }
        ResourceKind::Reviews => {
            list_page::<Reviews>(
                http,
                args,
                &["Key", "Business", "Rating", "Approved", "Comment"],
                |r| {
                    vec![
                        r.id.clone(),
                        r.business_id.clone(),
                        r.rating.to_string(),
                        output::yes_no(r.approved).to_string(),
                        truncate_label(&r.comment, 48),
                    ]
                },
            )
            .await
        }
        ResourceKind::Coupons => {
            list_page::<Coupons>(
                http,
                args,
                &["Key", "Name", "Amount", "Active", "Expires"],
                |c| {
                    vec![
                        c.id.clone(),
                        c.name.clone(),
                        c.amount.to_string(),
                        output::yes_no(c.is_active).to_string(),
                        c.expires_on.format("%Y-%m-%d").to_string(),
                    ]
                },
            )
            .await
        }
        ResourceKind::ReferralProfiles => {
            list_page::<ReferralProfiles>(
                http,
                args,
                &["Key", "Name", "Email", "Status", "Code"],
                |p| {
                    vec![
                        p.auth_id.clone(),
                        truncate_label(&p.legal_name, 32),
                        p.contact_email.clone(),
                        p.enrollment_status.to_string(),
                        p.referral_code.clone().unwrap_or_else(|| "-".to_string()),
                    ]
                },
            )
            .await
        }
        ResourceKind::ReferralInvites => {
            list_page::<ReferralInvites>(
                http,
                args,
                &["Key", "Invitee", "Status", "Sent", "Expires"],
                |i| {
                    vec![
                        i.id.clone().unwrap_or_else(|| "-".to_string()),
                        i.invitee_email.clone(),
                        i.status.to_string(),
                        i.sent_at.format("%Y-%m-%d").to_string(),
                        i.expires_at.format("%Y-%m-%d").to_string(),
                    ]
                },
            )
            .await
        }
        ResourceKind::Payouts => {
            list_page::<PayoutBalances>(
                http,
                args,
                &["Key", "Name", "Balance", "Lifetime", "Account"],
                |w| {
                    let (name, account) = w.referral_profile.as_ref().map_or_else(
                        || ("-".to_string(), "-".to_string()),
                        |p| {
                            (
                                truncate_label(&p.legal_name, 32),
                                mask_account_number(&p.bank.account_number),
                            )
                        },
                    );
                    vec![
                        w.auth_id.clone(),
                        name,
                        format_amount(w.current_balance),
                        format_amount(w.lifetime_earnings),
                        account,
                    ]
                },
            )
            .await
        }
        ResourceKind::Bookings => {
            list_page::<Bookings>(
                http,
                args,
                &["Key", "Business", "Customer", "Start", "Status", "Payment"],
                |b| {
                    vec![
                        b.id.clone(),
                        b.business_auth_id.clone(),
                        b.customer_auth_id.clone(),
                        b.start.format("%Y-%m-%d %H:%M").to_string(),
                        b.status.to_string(),
                        b.payment_status.to_string(),
                    ]
                },
            )
            .await
        }
    }
}

async fn list_page<R: AdminResource>(
    http: &HttpClient,
    args: &ListArgs,
    headers: &[&str],
    row: impl Fn(&R::Item) -> Vec<String>,
) -> Result<()> {
    let mut controller = build_controller::<R>(http, args)?;
    controller.refresh().await?;

    let rows: Vec<Vec<String>> = controller.items().iter().map(row).collect();
    print!("{}", output::render_table(headers, &rows));
    println!("{}", output::render_footer(&controller.pager()));
    Ok(())
}

/// Locate the item on its page, then toggle the field optimistically
async fn run_set(
    http: &HttpClient,
    resource: ResourceKind,
    key: &str,
    field: &str,
    value: &str,
    args: &ListArgs,
) -> Result<()> {
    let key = parse_key(key);
    let value = parse_field_value(value);

    match resource {
        ResourceKind::Businesses => set_field::<Businesses>(http, args, &key, field, value).await,
        ResourceKind::Users => set_field::<Users>(http, args, &key, field, value).await,
        ResourceKind::Products => set_field::<Products>(http, args, &key, field, value).await,
        ResourceKind::Services => set_field::<Services>(http, args, &key, field, value).await,
        ResourceKind::Specials => set_field::<Specials>(http, args, &key, field, value).await,
        ResourceKind::Reviews => set_field::<Reviews>(http, args, &key, field, value).await,
        ResourceKind::Coupons => set_field::<Coupons>(http, args, &key, field, value).await,
        ResourceKind::ReferralProfiles => {
            set_field::<ReferralProfiles>(http, args, &key, field, value).await
        }
        ResourceKind::ReferralInvites => {
            set_field::<ReferralInvites>(http, args, &key, field, value).await
        }
        ResourceKind::Payouts => Err(context_error!("payout balances are not editable")),
        ResourceKind::Bookings => set_field::<Bookings>(http, args, &key, field, value).await,
    }
}

async fn set_field<R: AdminResource>(
    http: &HttpClient,
    args: &ListArgs,
    key: &ItemKey,
    field: &str,
    value: FieldValue,
) -> Result<()> {
    let mut controller = build_controller::<R>(http, args)?;
    controller.refresh().await?;
    controller.mutate_field(key, field, value).await?;
    println!("{key}: {field} updated");
    Ok(())
}

fn build_controller<R: AdminResource>(
    http: &HttpClient,
    args: &ListArgs,
) -> Result<ListController<R>> {
    let mut controller = ListController::<R>::new(http.clone());

    if let Some(search) = &args.search {
        controller.set_search(search.clone());
    }
    for raw in &args.filters {
        let (name, value) = parse_filter(raw)?;
        controller.set_filter(name, value);
    }
    // Page last: search/filter changes reset it
    if args.page > 1 {
        controller.set_page(args.page);
    }

    Ok(controller)
}

fn parse_filter(raw: &str) -> Result<(String, FilterValue)> {
    let (name, value) = raw
        .split_once('=')
        .ok_or_else(|| context_error!("filter must be NAME=VALUE, got {raw:?}"))?;

    let value = match value {
        "true" => FilterValue::Flag(true),
        "false" => FilterValue::Flag(false),
        other => other
            .parse::<i64>()
            .map_or_else(|_| FilterValue::Text(other.to_string()), FilterValue::Number),
    };

    Ok((name.to_string(), value))
}

fn parse_key(raw: &str) -> ItemKey {
    match raw.rsplit_once(':') {
        Some((owner, index)) => index.parse::<usize>().map_or_else(
            |_| ItemKey::Document(raw.to_string()),
            |index| ItemKey::Embedded {
                owner: owner.to_string(),
                index,
            },
        ),
        None => ItemKey::Document(raw.to_string()),
    }
}

fn parse_field_value(raw: &str) -> FieldValue {
    match raw {
        "true" => FieldValue::Bool(true),
        "false" => FieldValue::Bool(false),
        other => FieldValue::Text(other.to_string()),
    }
}

/// Pay the selected outstanding balances
async fn run_pay(api: &AdminApi, auth_ids: &[String]) -> Result<()> {
    if auth_ids.is_empty() {
        return Err(context_error!("no accounts given"));
    }

    // The payout line is attributed to the signed-in admin
    let admin = api.establish_session().await?;

    let balances = api.pending_balances(1, 100).await?;
    let items: Vec<PayoutItem> = balances
        .items
        .iter()
        .filter(|b| auth_ids.contains(&b.auth_id))
        .map(|b| PayoutItem {
            auth_id: b.auth_id.clone(),
            amount: b.current_balance,
            related_id: admin.auth_id.clone(),
        })
        .collect();

    if items.len() < auth_ids.len() {
        return Err(context_error!(
            "{} of {} accounts have no outstanding balance",
            auth_ids.len() - items.len(),
            auth_ids.len()
        ));
    }

    if api.execute_payouts(&items).await? {
        let total: f64 = items.iter().map(|i| i.amount).sum();
        println!("Paid {} account(s), {}", items.len(), format_amount(total));
    } else {
        return Err(context_error!("payout execution was not acknowledged"));
    }

    Ok(())
}
