// src/cli.rs
use std::{env, error::Error, path::PathBuf};

use crate::{
    config::{
        consts::{INDUSTRY_SELECT, PREFECTURE_SELECT},
        endpoint::HostContext,
    },
    controller::{ClientContext, Phase, SearchController},
    core::net::HttpTransport,
    file,
    reference::{Catalog, INDUSTRIES, PREFECTURES},
    render::{Block, Surface},
};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Params {
    pub prefecture: Option<String>,
    pub municipality: Option<String>,
    pub industry: Option<String>,
    pub keywords: Option<String>,
    pub top_k: Option<String>,
    pub origin: Option<String>,
    pub endpoint: Option<String>,
    pub html: Option<PathBuf>,
    pub list_prefectures: bool,
    pub list_industries: bool,
    pub help: bool,
}

pub fn run() -> Result<(), Box<dyn Error>> {
    let params = parse_args(env::args().skip(1))?;
    run_with(&params)
}

pub fn run_with(params: &Params) -> Result<(), Box<dyn Error>> {
    if params.help {
        eprintln!("{}", include_str!("cli_help.txt"));
        return Ok(());
    }
    if params.list_prefectures {
        PREFECTURES.list().iter().for_each(|p| println!("{p}"));
        return Ok(());
    }
    if params.list_industries {
        INDUSTRIES.list().iter().for_each(|i| println!("{i}"));
        return Ok(());
    }

    let ctx = client_context(params);
    let mut controller = SearchController::new(ctx);
    apply_params(&mut controller, params)?;
    logd!("CLI: searching {}", controller.context().endpoint());

    let transport = HttpTransport::new()?;
    let phase = controller.search(&transport);
    let surface = controller.surface();

    print_surface(surface);

    if let Some(path) = &params.html {
        let written = file::write_results_page(path, surface)?;
        logf!("Export: results page → {}", written.display());
        println!("Wrote {}", written.display());
    }

    match phase {
        Phase::Failure => Err(surface.status.text().into()),
        _ => Ok(()),
    }
}

pub fn client_context(params: &Params) -> ClientContext {
    match (&params.endpoint, &params.origin) {
        (Some(endpoint), _) => ClientContext::with_endpoint(endpoint),
        (None, Some(origin)) => ClientContext::new(&HostContext::from_origin(origin)),
        (None, None) => ClientContext::new(&HostContext::none()),
    }
}

/// Copy flag values into the form, rejecting unknown select values.
pub fn apply_params(controller: &mut SearchController, params: &Params) -> Result<(), Box<dyn Error>> {
    let form = &mut controller.form;

    if let Some(pref) = &params.prefecture {
        if !PREFECTURES.is_valid(pref) {
            return Err(format!("Unknown prefecture: {pref} (see --list-prefectures)").into());
        }
        if let Some(control) = form.selects.get_mut(PREFECTURE_SELECT) {
            control.set_value(pref);
        }
    }
    if let Some(industry) = &params.industry {
        if !INDUSTRIES.is_valid(industry) {
            return Err(format!("Unknown industry: {industry} (see --list-industries)").into());
        }
        if let Some(control) = form.selects.get_mut(INDUSTRY_SELECT) {
            control.set_value(industry);
        }
    }
    if let Some(muni) = &params.municipality {
        form.municipality = muni.clone();
    }
    if let Some(kw) = &params.keywords {
        form.keywords = kw.clone();
    }
    if let Some(k) = &params.top_k {
        form.top_k = k.clone();
    }
    Ok(())
}

pub fn parse_args<I: IntoIterator<Item = String>>(args: I) -> Result<Params, Box<dyn Error>> {
    let mut params = Params::default();
    let mut args = args.into_iter();

    while let Some(a) = args.next() {
        let mut value = |flag: &str| args.next().ok_or_else(|| format!("Missing value for {flag}"));
        match a.as_str() {
            "--pref" => params.prefecture = Some(value("--pref")?),
            "--muni" => params.municipality = Some(value("--muni")?),
            "--industry" => params.industry = Some(value("--industry")?),
            "--kw" => params.keywords = Some(value("--kw")?),
            "--top-k" => params.top_k = Some(value("--top-k")?),
            "--origin" => params.origin = Some(value("--origin")?),
            "--endpoint" => params.endpoint = Some(value("--endpoint")?),
            "--html" => params.html = Some(PathBuf::from(value("--html")?)),
            "--list-prefectures" => params.list_prefectures = true,
            "--list-industries" => params.list_industries = true,
            "-h" | "--help" => params.help = true,
            _ => return Err(format!("Unknown arg: {a}").into()),
        }
    }
    Ok(params)
}

fn print_surface(surface: &Surface) {
    for block in surface.blocks() {
        match block {
            Block::NoMatches => println!("{}", crate::render::NO_MATCHES),
            Block::Card(card) => {
                println!("[{}] {}", card.badge, card.title);
                if !card.meta.is_empty() {
                    println!("  {}", card.meta_line());
                }
                println!("  confidence: {}", card.confidence);
                if !card.summary.is_empty() {
                    println!("  {}", card.summary);
                }
                if !card.reasons.is_empty() {
                    println!("  reasons: {}", card.reasons.join(", "));
                }
                if let Some(link) = &card.link {
                    println!("  {link}");
                }
                println!();
            }
        }
    }
    println!("{}", surface.status.text());
}
