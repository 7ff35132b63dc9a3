//! Dashboard API endpoint

use api_types::dashboard::DashboardView;
use axum::{Extension, Json, extract::State};
use chrono::Utc;

use crate::{ServerError, server::ServerState};
use ledger::users;

/// Handle requests for the user dashboard.
///
/// The monthly window is anchored to the server's current date; the ledger
/// takes the reference date as an explicit parameter so the computation
/// stays deterministic in tests.
pub async fn get(
    Extension(user): Extension<users::Model>,
    State(state): State<ServerState>,
) -> Result<Json<DashboardView>, ServerError> {
    let today = Utc::now().date_naive();
    let summary = state.ledger.dashboard(&user.username, today).await?;

    Ok(Json(DashboardView {
        total_wealth_minor: summary.total_wealth_minor,
        total_liquid_minor: summary.total_liquid_minor,
        total_allocated_minor: summary.total_allocated_minor,
        wealth_by_currency: summary
            .wealth_by_currency
            .into_iter()
            .map(|(currency, amount)| (currency.code().to_string(), amount))
            .collect(),
        monthly_income_minor: summary.monthly_income_minor,
        monthly_expense_minor: summary.monthly_expense_minor,
        monthly_savings_minor: summary.monthly_savings_minor,
    }))
}
