use clap::Parser;
use listing_etl::core::email::{send_report, SmtpSettings};
use listing_etl::utils::logger;
use std::path::PathBuf;

/// Standalone report mailer, unrelated to the sync pipeline. Credentials
/// are taken as plain flags; keep this to throwaway accounts.
#[derive(Debug, Parser)]
#[command(name = "send_report")]
#[command(about = "Emails a data report with one file attachment")]
struct Args {
    #[arg(long, default_value = "smtp.gmail.com")]
    smtp_relay: String,

    #[arg(long, help = "Sender address, also used as the SMTP login")]
    from: String,

    #[arg(long)]
    password: String,

    #[arg(long)]
    to: String,

    #[arg(long, default_value = "Daily Data Report")]
    subject: String,

    #[arg(long, default_value = "Please find the attached data report.")]
    body: String,

    #[arg(long)]
    attachment: PathBuf,

    #[arg(long, help = "Enable verbose output")]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    logger::init_cli_logger(args.verbose);

    let smtp = SmtpSettings {
        relay: args.smtp_relay.clone(),
        username: args.from.clone(),
        password: args.password.clone(),
    };

    send_report(
        &smtp,
        &args.from,
        &args.to,
        &args.subject,
        &args.body,
        &args.attachment,
    )?;

    println!("✅ Report sent to {}", args.to);
    Ok(())
}
