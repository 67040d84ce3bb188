use std::sync::Arc;

use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use courses_client::models::{CourseChanges, LessonQuery, SortOrder};
use courses_client::transport::ReqwestTransport;
use courses_client::{ClientConfig, CoursesService};

#[derive(Parser)]
#[command(name = "courses", about = "Query and update courses over the courses API")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List every course
    List,
    /// Show one course
    Show { id: i64 },
    /// List a page of lessons for a course
    Lessons {
        course_id: i64,
        #[arg(long, default_value = "")]
        filter: String,
        #[arg(long, default_value = "asc")]
        sort: SortOrder,
        #[arg(long, default_value_t = 0)]
        page: u32,
        #[arg(long, default_value_t = 3)]
        page_size: u32,
    },
    /// Change a course description
    Rename { id: i64, description: String },
}

fn print_json<T: Serialize>(value: &T) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "courses_client=info".to_string()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let config = ClientConfig::new_from_env()?;
    info!("using courses API at {}", config.base_url);
    let transport = ReqwestTransport::new(config)?;
    let service = CoursesService::new(Arc::new(transport));

    match cli.command {
        Command::List => print_json(&service.find_all_courses().await?)?,
        Command::Show { id } => print_json(&service.find_course_by_id(id).await?)?,
        Command::Lessons {
            course_id,
            filter,
            sort,
            page,
            page_size,
        } => {
            let query = LessonQuery::default()
                .filter(filter)
                .sort_order(sort)
                .page(page)
                .page_size(page_size);
            print_json(&service.find_lessons(course_id, &query).await?)?
        }
        Command::Rename { id, description } => {
            let changes = CourseChanges::description(description);
            print_json(&service.save_course(id, &changes).await?)?
        }
    }

    Ok(())
}
