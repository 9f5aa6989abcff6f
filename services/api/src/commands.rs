use crate::infra::{build_service, SharedService};
use admissions::applications::{
    filter_page, ApplicationId, ApplicationPatch, ApplicationRecord, ApplicationStatus,
    MetricsSnapshot, PageRequest,
};
use admissions::config::AppConfig;
use admissions::error::AppError;
use chrono::NaiveDate;
use clap::Args;
use std::time::Duration;

#[derive(Args, Debug)]
pub(crate) struct ListArgs {
    /// Page to fetch (1-indexed)
    #[arg(long, default_value_t = 1, allow_negative_numbers = true)]
    pub(crate) page: i64,
    /// Records per page
    #[arg(long, default_value_t = 6)]
    pub(crate) page_size: u32,
    /// Case-insensitive name or id search, applied to the fetched page only
    #[arg(long)]
    pub(crate) search: Option<String>,
}

#[derive(Args, Debug)]
pub(crate) struct UpdateArgs {
    /// Application id, e.g. APP-2023-007
    pub(crate) id: String,
    #[arg(long)]
    pub(crate) name: Option<String>,
    #[arg(long)]
    pub(crate) email: Option<String>,
    #[arg(long)]
    pub(crate) program: Option<String>,
    /// New status; values outside pending/verified/rejected are stored as given
    #[arg(long)]
    pub(crate) status: Option<String>,
    /// Application date (YYYY-MM-DD)
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) application_date: Option<NaiveDate>,
    #[arg(long)]
    pub(crate) address: Option<String>,
    #[arg(long)]
    pub(crate) phone: Option<String>,
    #[arg(long)]
    pub(crate) guardian: Option<String>,
    #[arg(long)]
    pub(crate) notes: Option<String>,
}

impl UpdateArgs {
    fn into_patch(self) -> (ApplicationId, ApplicationPatch) {
        let patch = ApplicationPatch {
            name: self.name,
            email: self.email,
            program: self.program,
            status: self.status.map(ApplicationStatus::from),
            application_date: self.application_date,
            address: self.address,
            phone: self.phone,
            guardian: self.guardian,
            notes: self.notes,
            ..ApplicationPatch::default()
        };
        (ApplicationId(self.id), patch)
    }
}

// CLI commands read a freshly generated store without the simulated latency.
fn cli_service() -> Result<SharedService, AppError> {
    let config = AppConfig::load()?;
    build_service(&config.backend, Duration::ZERO)
}

pub(crate) async fn run_metrics() -> Result<(), AppError> {
    let service = cli_service()?;
    let snapshot = service.metrics().await?;
    println!("{}", render_metrics(&snapshot));
    Ok(())
}

pub(crate) async fn run_list(args: ListArgs) -> Result<(), AppError> {
    let service = cli_service()?;
    let page = service
        .list(PageRequest::new(args.page, args.page_size))
        .await?;

    let visible: Vec<&ApplicationRecord> = match args.search.as_deref() {
        Some(query) => filter_page(&page.data, query),
        None => page.data.iter().collect(),
    };

    println!(
        "Applications page {}/{} ({} total, {} per page)",
        page.page, page.total_pages, page.total, page.page_size
    );
    if visible.is_empty() {
        println!("No applications found");
    }
    for record in visible {
        println!("{}", render_row(record));
    }
    Ok(())
}

pub(crate) async fn run_show(id: String) -> Result<(), AppError> {
    let service = cli_service()?;
    let lookup = service.get(&ApplicationId(id)).await?;
    println!("{}", render_record(&lookup.record));
    Ok(())
}

pub(crate) async fn run_update(args: UpdateArgs) -> Result<(), AppError> {
    let service = cli_service()?;
    let (id, patch) = args.into_patch();
    if patch.is_empty() {
        println!("No fields supplied; record left unchanged");
    }
    let record = service.update(id, patch).await?;
    println!("{}", render_record(&record));
    Ok(())
}

fn render_metrics(snapshot: &MetricsSnapshot) -> String {
    let mut lines = vec![
        "Admission analytics".to_string(),
        format!("- Total applicants: {}", snapshot.total_applicants),
        format!("- Approved: {}", snapshot.verified_applicants),
        format!("- Rejected: {}", snapshot.rejected_applicants),
        format!("- Pending: {}", snapshot.pending_applicants),
        "\nPrograms".to_string(),
    ];
    lines.extend(
        snapshot
            .programs
            .iter()
            .map(|program| format!("- {}: {}", program.name, program.count)),
    );
    lines.push("\nApplication trend".to_string());
    lines.extend(
        snapshot
            .application_trends
            .iter()
            .map(|point| format!("- {}: {}", point.date, point.count)),
    );
    lines.join("\n")
}

fn render_row(record: &ApplicationRecord) -> String {
    format!(
        "- {} | {} | {} | {} | {}",
        record.id,
        record.name,
        record.program,
        record.application_date,
        record.status.label()
    )
}

fn render_record(record: &ApplicationRecord) -> String {
    let mut lines = vec![
        format!("Application {}", record.id),
        format!("- Name: {}", record.name),
        format!("- Email: {}", record.email),
        format!("- Phone: {}", record.phone),
        format!("- Program: {}", record.program),
        format!("- Status: {}", record.status.label()),
        format!("- Applied: {}", record.application_date),
        format!("- Address: {}", record.address),
        format!("- Guardian: {}", record.guardian),
        format!(
            "- Test scores: SAT {} | GPA {:.1}",
            record.test_scores.sat, record.test_scores.gpa
        ),
        format!("- Notes: {}", record.notes),
    ];
    if record.documents.is_empty() {
        lines.push("- Documents: none".to_string());
    } else {
        lines.push(format!("- Documents: {}", record.documents.join(", ")));
    }
    lines.join("\n")
}
