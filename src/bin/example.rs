use anyhow::{bail, Result};
use clap::Parser as ClapParser;
use serde_json::json;
use tracing_subscriber::EnvFilter;

use uitemplate::binding::{bind_parameters, BindingConfig, OutputSpec, WidgetSpec};
use uitemplate::template::Template;
use uitemplate::templates::{card::Card, flat::Flat, sidebar::Sidebar};
use uitemplate::uid::UidGenerator;

#[derive(clap::Parser, Debug)]
/// Build the sine-controls demo dashboard and print its layout tree
/// and parameter-binding map as JSON.
struct Args {
    /// Template, one of "card", "sidebar", "flat".
    #[clap(long, default_value = "card")]
    template: String,

    /// Dashboard title.
    #[clap(long, default_value = "Sine controls")]
    title: String,

    /// CSS width of the card template.
    #[clap(long, default_value = "500px")]
    width: String,

    /// Pretty-print the JSON output.
    #[clap(long)]
    pretty: bool,

    /// Reseed the uid generator deterministically instead of from OS
    /// entropy, for diffable output.
    #[clap(long)]
    deterministic: bool,
}

fn sine_config() -> BindingConfig {
    BindingConfig::new()
        .param("fun", WidgetSpec::dropdown(&["sin", "cos", "exp"])
               .label("Function"))
        .param("figure_title", WidgetSpec::text("Initial Title")
               .label("Figure Title"))
        .param("phase", WidgetSpec::slider(1.0, 10.0).label("Phase"))
        .param("amplitude", WidgetSpec::slider(1.0, 10.0).value(3.0)
               .label("Amplitude"))
        .output(OutputSpec::Graph)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let mut template: Box<dyn Template> = match &*args.template {
        "card" => Box::new(Card::new(Some(&args.title), Some(&args.width))),
        "sidebar" => Box::new(Sidebar::new(Some(&args.title), 4)),
        "flat" => Box::new(Flat::new()),
        other => bail!("unknown template {other:?}, expected \
                        \"card\", \"sidebar\" or \"flat\""),
    };

    let uids = UidGenerator::from_entropy()?;
    if args.deterministic {
        uids.reset();
    }

    let binding = bind_parameters(&mut *template, &sine_config(), &uids)?;

    let doc = json!({
        "layout": template.layout(),
        "binding": binding,
        "inline_css": template.inline_css(),
    });
    if args.pretty {
        println!("{}", serde_json::to_string_pretty(&doc)?);
    } else {
        println!("{}", serde_json::to_string(&doc)?);
    }
    Ok(())
}
