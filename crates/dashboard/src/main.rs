use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use skillpath_core::resource_filter::ResourceFilter;
use skillpath_dashboard::config::{AppConfig, DashboardView};
use skillpath_dashboard::service::DashboardService;
use skillpath_data::{InMemoryRepository, LatencyProfile};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    // Logs go to stderr so stdout carries only the rendered view.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "skillpath_dashboard=info,skillpath_data=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // --- Configuration ---
    let config = AppConfig::from_env().context("Failed to load configuration")?;
    tracing::info!(
        view = config.view.as_str(),
        strategy = config.dashboard.progress.strategy.as_str(),
        simulate_latency = config.simulate_latency,
        "Loaded configuration"
    );

    // --- Repository ---
    let latency = if config.simulate_latency {
        LatencyProfile::simulated()
    } else {
        LatencyProfile::none()
    };
    let repo = InMemoryRepository::seeded()
        .context("Failed to load seed data")?
        .with_latency(latency);

    // --- Service ---
    let service = DashboardService::new(Arc::new(repo), config.dashboard)?;

    let rendered = match config.view {
        DashboardView::Dashboard => serde_json::to_string_pretty(&service.dashboard().await?)?,
        DashboardView::Skills => serde_json::to_string_pretty(&service.skills_analysis().await?)?,
        DashboardView::Plan => serde_json::to_string_pretty(&service.learning_plan().await?)?,
        DashboardView::Resources => {
            serde_json::to_string_pretty(&service.resources(&ResourceFilter::default()).await?)?
        }
        DashboardView::Courses => serde_json::to_string_pretty(&service.course_progress().await?)?,
        DashboardView::Lesson => {
            let id = config.lesson_id.as_deref().context("LESSON_ID is not set")?;
            match &config.quiz_answers {
                Some(answers) => serde_json::to_string_pretty(&service.attempt_lesson(id, answers).await?)?,
                None => serde_json::to_string_pretty(&service.lesson(id).await?)?,
            }
        }
    };
    println!("{rendered}");

    Ok(())
}
