use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use comfy_table::Table;
use formprops_model::SkinKind;
use formprops_render::FormRenderer;
use tracing::{info, info_span, warn};

use formprops_cli::config::{OptionOverrides, load_options};
use formprops_cli::input::{load_errors, load_payload};
use formprops_cli::inspect::{InspectReport, inspect};

use crate::cli::{InspectArgs, RenderArgs};
use crate::summary::apply_table_style;

pub struct RenderOutcome {
    pub html: String,
    /// Set when the HTML went to a file rather than stdout.
    pub written_to: Option<PathBuf>,
    pub fields: usize,
    pub skin: SkinKind,
}

pub fn run_render(args: &RenderArgs) -> Result<RenderOutcome> {
    let span = info_span!("render", payload = %args.payload.display());
    let _guard = span.enter();

    let overrides = OptionOverrides {
        skin: args.skin.map(Into::into),
        precedence: args.precedence.map(Into::into),
        pretty: args.pretty,
    };
    let options = overrides.apply(load_options(args.config.as_deref())?);
    let payload = load_payload(&args.payload)?;
    let errors = load_errors(args.errors.as_deref(), &payload)?;
    info!(
        skin = %options.skin,
        precedence = %options.precedence,
        fields = payload.fields.len(),
        errors = errors.len(),
        "rendering form"
    );

    let skin = options.skin;
    let renderer = FormRenderer::new(options);
    let mut html = renderer
        .render_form_with_errors(&payload, &errors)
        .context("render form")?;
    html.push('\n');

    if let Some(path) = &args.output {
        fs::write(path, &html).with_context(|| format!("write {}", path.display()))?;
        info!(path = %path.display(), bytes = html.len(), "wrote html");
    }
    Ok(RenderOutcome {
        html,
        written_to: args.output.clone(),
        fields: payload.fields.len(),
        skin,
    })
}

pub fn run_inspect(args: &InspectArgs) -> Result<InspectReport> {
    let span = info_span!("inspect", payload = %args.payload.display());
    let _guard = span.enter();

    let overrides = OptionOverrides {
        precedence: args.precedence.map(Into::into),
        ..OptionOverrides::default()
    };
    let options = overrides.apply(load_options(args.config.as_deref())?);
    let payload = load_payload(&args.payload)?;
    let errors = load_errors(args.errors.as_deref(), &payload)?;
    let report = inspect(&payload, &errors, options.precedence);
    for key in &report.unused_error_keys {
        warn!(key = %key, "validation error key is not bound to any field");
    }
    Ok(report)
}

pub fn run_skins() -> Result<()> {
    let mut table = Table::new();
    table.set_header(vec!["Skin", "Description"]);
    apply_table_style(&mut table);
    for skin in SkinKind::ALL {
        table.add_row(vec![skin.as_str(), skin.description()]);
    }
    println!("{table}");
    Ok(())
}
