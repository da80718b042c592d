use anyhow::Context;
use clap::Parser;
use dmlab_site::core::forms::{self, FormSession, LogNotifier, SimulatedGateway};
use dmlab_site::core::views;
use dmlab_site::utils::{logger, validation::Validate};
use dmlab_site::{
    builtin_posts, format_usd, load_posts_from_file, CliConfig, LatencyProfile, LeadInputs,
    Repository, ServiceCatalog, SiteConfig, WorkshopCatalog,
};
use std::path::PathBuf;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    logger::init_cli_logger(cli.verbose);
    tracing::info!("Starting site-demo");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let config = match &cli.config {
        Some(path) => SiteConfig::from_file(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => SiteConfig::default(),
    };

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let latency = if cli.no_latency {
        LatencyProfile::none()
    } else {
        config.latency_profile()
    };

    let data = config.data();
    let services_path = cli.services_data.clone().or_else(|| data.services.clone().map(PathBuf::from));
    let workshops_path = cli.workshops_data.clone().or_else(|| data.workshops.clone().map(PathBuf::from));
    let posts_path = cli.posts_data.clone().or_else(|| data.posts.clone().map(PathBuf::from));

    let services = match services_path {
        Some(path) => ServiceCatalog::from_file(&path, latency)
            .with_context(|| format!("failed to load services from {}", path.display()))?,
        None => ServiceCatalog::builtin(latency).context("embedded services dataset is invalid")?,
    };
    let workshops = match workshops_path {
        Some(path) => WorkshopCatalog::from_file(&path, latency)
            .with_context(|| format!("failed to load workshops from {}", path.display()))?,
        None => WorkshopCatalog::builtin(latency).context("embedded workshops dataset is invalid")?,
    };
    let posts = match posts_path {
        Some(path) => load_posts_from_file(&path)
            .with_context(|| format!("failed to load posts from {}", path.display()))?,
        None => builtin_posts().context("embedded posts dataset is invalid")?,
    };

    println!("🧪 {} :: site data demo", config.site.name);
    println!();

    // Services page: grouped catalog.
    let all_services = services.list_all().await?;
    println!("📋 Services ({} total)", all_services.len());
    for (category, group) in views::services_by_category(&all_services) {
        println!("  {}: {}", category.display_title(), category.summary());
        for service in group {
            println!("    #{} {} ({})", service.id, service.title, service.price);
        }
    }
    println!();

    // Training page: curriculum by stage.
    let all_workshops = workshops.list_all().await?;
    println!("🎓 Curriculum ({} workshops)", all_workshops.len());
    for (stage, group) in views::workshops_by_stage(&all_workshops) {
        println!("  {} \"{}\": {}", stage, stage.display_title(), stage.summary());
        for workshop in group {
            println!("    #{} {} [{}]", workshop.id, workshop.title, workshop.duration);
            for outcome in workshop.key_outcomes(2) {
                println!("      • {}", outcome);
            }
        }
    }
    println!();

    // Blog page: featured post plus a search.
    println!("📰 Blog ({} posts)", posts.len());
    if let Some(featured) = views::featured_post(&posts) {
        println!("  Featured: {} ({})", featured.title, featured.category);
    }
    let matching = views::filter_by_search_and_category(&posts, "email", views::ALL_CATEGORIES);
    println!("  Search \"email\" matches {} posts", matching.len());
    println!();

    // Lead calculator worked example.
    let inputs = LeadInputs::new("10000", "2.5", "297");
    if let Some(projection) = inputs.project() {
        println!("🧮 Lead calculator (10,000 visits, 2.5% conversion, $297 AOV)");
        println!("  Monthly leads:   {}", projection.projected_leads);
        println!("  Monthly revenue: {}", format_usd(projection.monthly_revenue));
        println!("  Annual revenue:  {}", format_usd(projection.annual_revenue));
        println!();
    }

    // Contact form flow through the simulated gateway.
    let mut session = FormSession::new(&forms::CONTACT);
    session.set("name", "Demo Visitor")?;
    session.set("email", config.site.contact_email.as_str())?;
    session.set("subject", "Training inquiry")?;
    session.set("inquiryType", forms::INQUIRY_TYPES[1])?;
    session.set("message", "I'd like to book the lab for my team.")?;

    let gateway = if cli.no_latency {
        SimulatedGateway::with_delay(std::time::Duration::ZERO)
    } else {
        SimulatedGateway::new()
    };
    println!("📨 Submitting demo contact form...");
    let outcome = session.submit(&gateway, &LogNotifier).await?;
    println!("  Outcome: {:?}", outcome);

    tracing::info!("✅ Demo completed");
    Ok(())
}
