//! Dashboard command: role-gated back-office views.
//!
//! The permitted tab set is computed once from the account's role; each
//! tab then fetches whatever remote data it shows. A customer account gets
//! turned away before any dashboard call is made.

#![allow(clippy::print_stdout)]

use rave_core::DashboardView;
use rave_storefront::dashboard::{initial_tab, tabs_for};
use rave_storefront::error::{AppError, Result};
use rave_storefront::state::AppState;

/// Render the dashboard for the logged-in account's role.
pub async fn run(state: &AppState) -> Result<()> {
    if state.config().api_token.is_none() {
        return Err(AppError::NotAuthenticated);
    }
    let user = state.auth().profile().await?;

    if !user.role.can_access_dashboard() {
        return Err(AppError::Validation(
            "Your account does not have dashboard access".to_string(),
        ));
    }

    let tabs = tabs_for(user.role);
    let tab_titles: Vec<_> = tabs.iter().map(|tab| tab.title).collect();
    println!("Dashboard ({}): {}", user.role, tab_titles.join(" | "));

    // Open the landing tab the role defaults to.
    if let Some(tab) = initial_tab(user.role) {
        println!();
        render_view(state, tab.view).await?;
    }
    Ok(())
}

async fn render_view(state: &AppState, view: DashboardView) -> Result<()> {
    match view {
        DashboardView::Overview => overview(state).await,
        DashboardView::EmployeeHome => employee_home(state).await,
        DashboardView::Orders => orders(state).await,
        DashboardView::Inventory => inventory(state).await,
        DashboardView::Users => users(state).await,
        DashboardView::EmployeeManagement => employee_management(state).await,
        // The POS is interactive; the terminal rendition just points at the
        // cart + checkout commands it is built from.
        DashboardView::Pos => {
            println!("POS: use `rave cart` and `rave checkout` on a store terminal");
            Ok(())
        }
    }
}

async fn overview(state: &AppState) -> Result<()> {
    let summary = state.billing().summary().await?;
    println!("Orders:     {}", summary.total_orders);
    println!("Revenue:    LKR {:.2}", summary.total_revenue);
    println!("Avg order:  LKR {:.2}", summary.avg_order_value);
    println!("Customers:  {}", summary.total_customers);

    let recent = state.billing().recent_orders().await?;
    if !recent.is_empty() {
        println!("\nRecent orders:");
        for order in recent {
            println!(
                "  #{:<6} {:<20} {}",
                order.id,
                order.customer_name.as_deref().unwrap_or("N/A"),
                order.status
            );
        }
    }

    let best = state.billing().best_products().await?;
    if !best.is_empty() {
        println!("\nBest sellers:");
        for product in best {
            println!(
                "  {:<30} {:<12} {:>4} sold, LKR {:.2}",
                product.name, product.brand, product.total_sold, product.total_revenue
            );
        }
    }

    let daily = state.billing().daily_sales().await?;
    if !daily.is_empty() {
        println!("\nDaily sales:");
        for day in daily {
            println!(
                "  {} {:>4} orders, LKR {:.2}",
                day.date.format("%Y-%m-%d"),
                day.orders_count,
                day.daily_revenue
            );
        }
    }
    Ok(())
}

async fn employee_home(state: &AppState) -> Result<()> {
    let commissions = state.commissions().employee_commissions().await?;
    if commissions.is_empty() {
        println!("No commissions calculated yet");
        return Ok(());
    }
    for commission in commissions {
        println!(
            "{:<20} {:>2}/{:<4} sales LKR {:<12.2} -> LKR {:.2}",
            commission.employee_name,
            commission.month,
            commission.year,
            commission.total_sales,
            commission.commission_amount
        );
    }
    Ok(())
}

async fn orders(state: &AppState) -> Result<()> {
    for order in state.orders().all().await? {
        println!(
            "#{:<6} {:<20} {}",
            order.id,
            order.customer_name.as_deref().unwrap_or("N/A"),
            order.status
        );
    }
    Ok(())
}

async fn inventory(state: &AppState) -> Result<()> {
    let products = state
        .catalog()
        .list(&rave_storefront::api::ProductFilters::default())
        .await?;
    for product in products {
        println!("#{:<5} {:<30} stock {}", product.id, product.name, product.stock);
    }
    Ok(())
}

async fn users(state: &AppState) -> Result<()> {
    for user in state.auth().users().await? {
        println!("#{:<5} {:<25} {}", user.id, user.email, user.role);
    }
    Ok(())
}

async fn employee_management(state: &AppState) -> Result<()> {
    let rates = state.commissions().rates().await?;
    if rates.is_empty() {
        println!("No commission rates configured");
        return Ok(());
    }
    for rate in rates {
        let band = rate.max_sales.map_or_else(
            || format!("LKR {:.2}+", rate.min_sales),
            |max| format!("LKR {:.2} - LKR {max:.2}", rate.min_sales),
        );
        let active = if rate.is_active { "active" } else { "inactive" };
        println!(
            "{:<15} {:<30} {:.1}% ({active})",
            rate.name,
            band,
            rate.commission_rate * rust_decimal::Decimal::ONE_HUNDRED
        );
    }
    Ok(())
}
