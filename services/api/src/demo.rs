use crate::seed::seed_roster;
use algoseat::config::AppConfig;
use algoseat::error::AppError;
use algoseat::workflows::enrollment::{
    applicants_with_status, Applicant, ApplicationStatus,
    DashboardAction, DashboardOverview, DashboardPage, DashboardState, PageRequest,
    RankedApplicant, RankingEngine, SlotSummary, StatusListView,
};
use algoseat::workflows::roster::RosterImporter;
use clap::Args;
use std::path::PathBuf;

#[derive(Args, Debug, Default)]
pub(crate) struct RankArgs {
    /// CSV roster export; defaults to the sample roster
    #[arg(long)]
    pub(crate) roster: Option<PathBuf>,
    /// Only print the top N applicants
    #[arg(long)]
    pub(crate) limit: Option<usize>,
}

#[derive(Args, Debug, Default)]
pub(crate) struct SlotsArgs {
    /// CSV roster export; defaults to the sample roster
    #[arg(long)]
    pub(crate) roster: Option<PathBuf>,
    /// Override the configured program capacity
    #[arg(long)]
    pub(crate) total_slots: Option<u32>,
}

pub(crate) fn run_rank(args: RankArgs) -> Result<(), AppError> {
    let roster = load_roster(args.roster)?;
    let ranking = RankingEngine::standard().rank(&roster);
    let shown = args.limit.unwrap_or(ranking.len());

    println!("Application rankings ({} applicants)", ranking.len());
    render_ranking(&ranking[..shown.min(ranking.len())]);
    Ok(())
}

pub(crate) fn run_slots(args: SlotsArgs) -> Result<(), AppError> {
    let roster = load_roster(args.roster)?;
    let total_slots = match args.total_slots {
        Some(total) => total,
        None => AppConfig::load()?.enrollment.total_slots,
    };

    render_slots(&SlotSummary::compute(total_slots, &roster));
    Ok(())
}

pub(crate) fn run_demo() -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let credentials = config.enrollment.admin.clone();
    let page = PageRequest::new(1, config.enrollment.page_size);

    println!("AlgoSeat enrollment dashboard demo");
    let login = DashboardAction::Login {
        username: credentials.username.clone(),
        password: credentials.password.clone(),
    };
    let state = DashboardState::new(seed_roster()).apply(login, &credentials)?;

    render_overview(&DashboardOverview::compute(
        config.enrollment.total_slots,
        &state.applicants,
    ));

    let pending_page = DashboardPage::Applications(ApplicationStatus::Pending);
    let state = state.apply(DashboardAction::Navigate(pending_page), &credentials)?;
    let pending = applicants_with_status(&state.applicants, ApplicationStatus::Pending, page);
    render_list(&pending);

    let Some(first) = pending.page.items.first() else {
        return Ok(());
    };

    let id = first.id.clone();
    let state = state.apply(DashboardAction::ViewApplicant(id.clone()), &credentials)?;
    if let Some(applicant) = state.selected_applicant() {
        render_profile(applicant);
    }

    let approve = DashboardAction::UpdateStatus {
        id: id.clone(),
        status: ApplicationStatus::Approved,
    };
    let state = state
        .apply(approve, &credentials)?
        .apply(DashboardAction::BackToList, &credentials)?;
    println!("\nApproved applicant {id}; back on {:?}", state.page);

    let state = state.apply(DashboardAction::Navigate(DashboardPage::Rankings), &credentials)?;
    println!("\nApplication rankings");
    render_ranking(&RankingEngine::standard().rank(&state.applicants));

    println!();
    render_slots(&SlotSummary::compute(
        config.enrollment.total_slots,
        &state.applicants,
    ));
    Ok(())
}

fn load_roster(path: Option<PathBuf>) -> Result<Vec<Applicant>, AppError> {
    match path {
        Some(path) => Ok(RosterImporter::from_path(path)?),
        None => Ok(seed_roster()),
    }
}

fn render_overview(overview: &DashboardOverview) {
    println!("\nDashboard overview");
    println!("- {} total applications", overview.total_applications);
    println!(
        "- {} of {} slots filled ({:.1}%)",
        overview.slots.filled_slots, overview.slots.total_slots, overview.slots.filled_percentage
    );
    println!(
        "- {} pending | {} waitlisted | {} rejected",
        overview.slots.pending_applications,
        overview.slots.waitlisted_applications,
        overview.slots.rejected_applications
    );
}

fn render_list(view: &StatusListView) {
    println!("\n{} ({})", view.title, view.subtitle);
    for applicant in &view.page.items {
        println!(
            "  - [{}] {} | {} | submitted {}",
            applicant.application_id,
            applicant.full_name,
            applicant.school_attended,
            applicant.submission_date
        );
    }
    println!(
        "  page {} of {} ({} applications)",
        view.page.meta.page,
        view.page.meta.total_pages.max(1),
        view.page.meta.total_items
    );
}

fn render_profile(applicant: &Applicant) {
    let breakdown = RankingEngine::standard().score(applicant);
    println!("\nApplicant profile: {} ({})", applicant.full_name, applicant.id);
    println!("  Guardians: {}", applicant.parent_guardian_names);
    println!("  Address: {}", applicant.address);
    for component in &breakdown.components {
        println!(
            "  {:<22} {:>6.1}  {}",
            component.factor.label(),
            component.points,
            component.notes
        );
    }
    println!("  {:<22} {:>6.1}", "Composite score", breakdown.total);
}

fn render_ranking(ranking: &[RankedApplicant]) {
    println!(
        "  {:>4}  {:<20} {:>5} {:>6} {:>9} {:>6} {:>7}  {}",
        "Rank", "Applicant", "GPA", "Exam", "Income", "Km", "Score", "Status"
    );
    for entry in ranking {
        let applicant = &entry.applicant;
        println!(
            "  {:>4}  {:<20} {:>5.2} {:>6.1} {:>9.0} {:>6.1} {:>7.1}  {}",
            entry.rank,
            applicant.full_name,
            applicant.grades,
            applicant.entrance_exam_score,
            applicant.household_income,
            applicant.proximity_to_school,
            entry.composite_score,
            applicant.status.label()
        );
    }
}

fn render_slots(summary: &SlotSummary) {
    println!("Slot utilization");
    println!(
        "- {} filled | {} available | {} total ({:.1}% filled)",
        summary.filled_slots,
        summary.available_slots,
        summary.total_slots,
        summary.filled_percentage
    );
    println!(
        "- {} approved | {} pending | {} waitlisted | {} rejected",
        summary.students_approved,
        summary.pending_applications,
        summary.waitlisted_applications,
        summary.rejected_applications
    );
    if summary.is_oversubscribed() {
        println!("- warning: more applicants approved than slots available");
    }
}
