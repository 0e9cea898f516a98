//! AWS Lambda handler for rental analyses
//!
//! Accepts the calculator inputs as JSON and returns the full analysis,
//! optionally with the amortization schedule.

use chrono::NaiveDate;
use lambda_runtime::{run, service_fn, Error, LambdaEvent};
use rental_analysis::{analyze, AmortizationSchedule, AnalysisInput, AnalysisResult};
use serde::{Deserialize, Serialize};

/// Request body: analysis inputs plus output options
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisRequest {
    /// Calculator inputs; omitted fields take their defaults
    #[serde(flatten)]
    pub input: AnalysisInput,

    /// Include the month-by-month amortization schedule
    #[serde(default)]
    pub include_schedule: bool,

    /// Date of the first mortgage payment, used to date schedule rows
    #[serde(default)]
    pub first_payment: Option<NaiveDate>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResponse {
    pub analysis: AnalysisResult,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub schedule: Option<AmortizationSchedule>,
}

fn handle_request(request: AnalysisRequest) -> AnalysisResponse {
    let analysis = analyze(&request.input);

    let schedule = request.include_schedule.then(|| {
        AmortizationSchedule::build_dated(
            request.input.loan_amount(),
            request.input.interest_rate,
            request.input.loan_term_years,
            request.first_payment,
        )
    });

    AnalysisResponse { analysis, schedule }
}

async fn function_handler(event: LambdaEvent<AnalysisRequest>) -> Result<AnalysisResponse, Error> {
    let (request, context) = event.into_parts();
    log::info!(
        "request {}: price={} rent={} schedule={}",
        context.request_id,
        request.input.purchase_price,
        request.input.monthly_rent,
        request.include_schedule
    );

    Ok(handle_request(request))
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    env_logger::init();
    run(service_fn(function_handler)).await
}
