//! Subcommand implementations.
//!
//! Each returns `Ok(false)` after printing a user-facing failure, so the
//! binary can exit non-zero without treating it as a crash. `Err` is reserved
//! for I/O errors writing to the terminal.

use std::io::{self, Write};

use clap::Args;
use geo_core::{find_example, ApiError, Explorer, ParamKind, Transport, EXAMPLES};
use tracing::warn;

#[derive(Args, Debug)]
pub struct ExampleArgs {
    /// Example id, see `gz-geo examples`
    pub id: String,

    /// Parameter as name=value; repeatable. An empty value omits the parameter
    #[arg(short = 'p', long = "param", value_name = "NAME=VALUE")]
    pub params: Vec<String>,
}

fn split_param(raw: &str) -> Result<(&str, &str), ApiError> {
    raw.split_once('=').ok_or_else(|| {
        ApiError::ValidationFailure(format!("expected NAME=VALUE, got {raw:?}"))
    })
}

/// Apply `args` to the example's form. Prints and returns `false` on failure.
fn fill_form<W: Write>(out: &mut W, explorer: &mut Explorer, args: &ExampleArgs) -> io::Result<bool> {
    let Some(form) = explorer.form_mut(&args.id) else {
        writeln!(out, "error: unknown example {:?}; run `gz-geo examples`", args.id)?;
        return Ok(false);
    };
    for raw in &args.params {
        if let Err(err) = split_param(raw).and_then(|(name, value)| form.set_param(name, value)) {
            writeln!(out, "error: {err}")?;
            return Ok(false);
        }
    }
    Ok(true)
}

pub fn districts<W: Write, T: Transport>(
    out: &mut W,
    explorer: &mut Explorer,
    transport: &T,
) -> io::Result<bool> {
    let state = explorer.refresh_districts(transport);
    if let Some(error) = &state.error {
        writeln!(out, "error: {error}")?;
        return Ok(false);
    }
    if let Some(source) = &state.last_success_source_label {
        writeln!(out, "# loaded from {source}")?;
    }
    for district in &state.districts {
        writeln!(out, "{district}")?;
    }
    Ok(true)
}

pub fn examples<W: Write>(out: &mut W) -> io::Result<bool> {
    for example in EXAMPLES {
        writeln!(out, "{}  GET {}", example.id, example.path_template)?;
        writeln!(out, "    {}", example.description)?;
        for param in example.params {
            let kind = match param.kind {
                ParamKind::Text => "text",
                ParamKind::DistrictDropdown => "district",
                ParamKind::Number => "number",
            };
            write!(out, "    -p {}=<{kind}>  {}", param.name, param.label)?;
            match param.default_value {
                Some(default) => writeln!(out, " [default: {default}]")?,
                None => writeln!(out, " ({})", param.placeholder)?,
            }
        }
    }
    Ok(true)
}

pub fn url<W: Write>(out: &mut W, explorer: &mut Explorer, args: &ExampleArgs) -> io::Result<bool> {
    if !fill_form(out, explorer, args)? {
        return Ok(false);
    }
    let result = explorer.config().query_base().and_then(|base| {
        explorer
            .form(&args.id)
            .map(|form| form.request_url(base))
            .unwrap_or_else(|| Err(ApiError::ValidationFailure(format!("unknown example {}", args.id))))
    });
    match result {
        Ok(url) => {
            writeln!(out, "{url}")?;
            Ok(true)
        }
        Err(err) => {
            writeln!(out, "error: {err}")?;
            Ok(false)
        }
    }
}

/// Warn when a district parameter names something the API did not list,
/// the way a dropdown would never offer it.
fn check_districts<W: Write, T: Transport>(
    out: &mut W,
    explorer: &mut Explorer,
    transport: &T,
    id: &str,
) -> io::Result<()> {
    let Some(example) = find_example(id) else {
        return Ok(());
    };
    let chosen: Vec<(&str, String)> = example
        .params
        .iter()
        .filter(|p| p.kind == ParamKind::DistrictDropdown)
        .filter_map(|p| {
            let value = explorer.form(id)?.value(p.name)?;
            (!value.is_empty()).then(|| (p.name, value.to_string()))
        })
        .collect();
    if chosen.is_empty() {
        return Ok(());
    }

    explorer.refresh_districts(transport);
    if let Some(error) = &explorer.districts.error {
        warn!(%error, "could not load districts to check the district parameter");
        return Ok(());
    }
    for (name, value) in chosen {
        let known = example
            .param(name)
            .map(|p| explorer.district_choices(p).contains(&value))
            .unwrap_or(false);
        if !known {
            writeln!(out, "warning: {value:?} is not a known district")?;
        }
    }
    Ok(())
}

pub fn call<W: Write, T: Transport>(
    out: &mut W,
    explorer: &mut Explorer,
    transport: &T,
    args: &ExampleArgs,
) -> io::Result<bool> {
    if !fill_form(out, explorer, args)? {
        return Ok(false);
    }
    check_districts(out, explorer, transport, &args.id)?;

    let result = explorer.submit(&args.id, transport).cloned();
    if let Some(url) = explorer.form(&args.id).and_then(|f| f.request_url.as_deref()) {
        writeln!(out, "GET {url}")?;
    }
    match result {
        Ok(body) => {
            let pretty = serde_json::to_string_pretty(&body).map_err(io::Error::other)?;
            writeln!(out, "{pretty}")?;
            Ok(true)
        }
        Err(err) => {
            writeln!(out, "error: {err}")?;
            Ok(false)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo_core::{ApiConfig, FetchError, HttpRequest, HttpResponse};
    use std::cell::RefCell;

    /// Serves the district list and echoes every other path back as JSON.
    #[derive(Default)]
    struct Echo {
        seen: RefCell<Vec<String>>,
    }

    impl Transport for Echo {
        fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, FetchError> {
            self.seen.borrow_mut().push(request.path.clone());
            let body = if request.path.ends_with("/districts") {
                r#"["天河区","越秀区"]"#.to_string()
            } else {
                serde_json::json!({ "path": request.path }).to_string()
            };
            Ok(HttpResponse {
                status: 200,
                headers: Vec::new(),
                body,
            })
        }
    }

    fn explorer() -> Explorer {
        Explorer::new(ApiConfig::new("http://p", "http://s"))
    }

    fn args(id: &str, params: &[&str]) -> ExampleArgs {
        ExampleArgs {
            id: id.to_string(),
            params: params.iter().map(|p| p.to_string()).collect(),
        }
    }

    fn run<F: FnOnce(&mut Vec<u8>) -> io::Result<bool>>(f: F) -> (bool, String) {
        let mut out = Vec::new();
        let ok = f(&mut out).unwrap();
        (ok, String::from_utf8(out).unwrap())
    }

    #[test]
    fn split_param_keeps_equals_in_value() {
        assert_eq!(split_param("name=a=b").unwrap(), ("name", "a=b"));
        assert_eq!(split_param("name=").unwrap(), ("name", ""));
        assert!(split_param("name").is_err());
    }

    #[test]
    fn districts_prints_source_and_names() {
        let mut explorer = explorer();
        let (ok, text) = run(|out| districts(out, &mut explorer, &Echo::default()));
        assert!(ok);
        assert_eq!(text, "# loaded from secondary (http://s)\n天河区\n越秀区\n");
    }

    #[test]
    fn districts_without_urls_fails() {
        let mut explorer = Explorer::new(ApiConfig::new("", ""));
        let transport = Echo::default();
        let (ok, text) = run(|out| districts(out, &mut explorer, &transport));
        assert!(!ok);
        assert!(text.starts_with("error: "));
        assert!(transport.seen.borrow().is_empty());
    }

    #[test]
    fn examples_lists_every_id() {
        let (ok, text) = run(examples);
        assert!(ok);
        for example in EXAMPLES {
            assert!(text.contains(example.id));
        }
        assert!(text.contains("-p pageSize=<number>"));
    }

    #[test]
    fn url_applies_params_and_defaults() {
        let mut explorer = explorer();
        let (ok, text) = run(|out| {
            url(out, &mut explorer, &args("get-roads-complex", &["name=路", "page="]))
        });
        assert!(ok);
        assert_eq!(text, "http://p/roads?name=%E8%B7%AF&pageSize=20\n");
    }

    #[test]
    fn url_rejects_unknown_example() {
        let mut explorer = explorer();
        let (ok, text) = run(|out| url(out, &mut explorer, &args("nope", &[])));
        assert!(!ok);
        assert!(text.contains("unknown example"));
    }

    #[test]
    fn url_rejects_bad_number() {
        let mut explorer = explorer();
        let (ok, text) =
            run(|out| url(out, &mut explorer, &args("get-roads-complex", &["page=abc"])));
        assert!(!ok);
        assert!(text.contains("non-negative integer"));
    }

    #[test]
    fn call_prints_url_and_pretty_json() {
        let mut explorer = explorer();
        let transport = Echo::default();
        let (ok, text) = run(|out| {
            call(out, &mut explorer, &transport, &args("street-to-districts", &["name=沙河"]))
        });
        assert!(ok);
        let expected_url = "http://p/streets?name=%E6%B2%99%E6%B2%B3";
        assert!(text.starts_with(&format!("GET {expected_url}\n")));
        assert!(text.contains(&format!("\"path\": \"{expected_url}\"")));
        // No district parameter, so no district lookup.
        assert_eq!(transport.seen.borrow().len(), 1);
    }

    #[test]
    fn call_warns_about_unknown_district() {
        let mut explorer = explorer();
        let transport = Echo::default();
        let (ok, text) = run(|out| {
            call(
                out,
                &mut explorer,
                &transport,
                &args("get-streets-by-district-or-name", &["district=火星区"]),
            )
        });
        assert!(ok);
        assert!(text.starts_with("warning: \"火星区\" is not a known district\n"));
    }

    #[test]
    fn call_with_known_district_does_not_warn() {
        let mut explorer = explorer();
        let (ok, text) = run(|out| {
            call(
                out,
                &mut explorer,
                &Echo::default(),
                &args("get-streets-by-district-or-name", &["district=天河区"]),
            )
        });
        assert!(ok);
        assert!(!text.contains("warning"));
    }

    #[test]
    fn call_without_primary_reports_configuration() {
        let mut explorer = Explorer::new(ApiConfig::new("", "http://s"));
        let transport = Echo::default();
        let (ok, text) =
            run(|out| call(out, &mut explorer, &transport, &args("get-districts", &[])));
        assert!(!ok);
        assert_eq!(text, "error: primary API base URL is not set\n");
        assert!(transport.seen.borrow().is_empty());
    }
}
