use std::path::Path;
use std::process::ExitCode;

use anyhow::Context;
use serde_json::Value;

use site_content_cms::{
    load_page_with_shared, CmsClient, CmsConfig, PageDocument, Paged, RequestOptions,
    TenantDocument,
};
use site_content_core::richtext::RichText;
use site_content_core::tenant::{HostMatch, TenantResolver};

use crate::cli::Command;

/// Hosts tried by `check` when none are given.
pub const DEFAULT_CHECK_HOSTS: &[&str] =
    &["ftiaxesite.gr", "www.ftiaxesite.gr", "localhost", "localhost:3000"];

const SECTION_KEYS: &[&str] = &["header", "hero", "features", "process", "contact", "footer"];

pub async fn run(command: Command, config: &CmsConfig) -> anyhow::Result<ExitCode> {
    match command {
        Command::Check { hosts, slug } => {
            let hosts = if hosts.is_empty() {
                DEFAULT_CHECK_HOSTS.iter().map(|h| h.to_string()).collect()
            } else {
                hosts
            };
            check(config, &hosts, &slug).await
        }
        Command::Page { host, slug, shared } => {
            let client = CmsClient::for_host(config, &host)?;
            let page = load_page_with_shared(&client, &slug, shared.as_deref()).await;
            println!("{}", serde_json::to_string_pretty(&page)?);
            Ok(ExitCode::SUCCESS)
        }
        Command::Tenant { host } => tenant(config, &host).await,
        Command::ResolveHost { hosts } => {
            let resolver = TenantResolver::new(config.tenant_slug.as_str());
            for host in &hosts {
                println!("{}", describe_host(&resolver, host));
            }
            Ok(ExitCode::SUCCESS)
        }
        Command::RichText { file, html } => {
            println!("{}", convert_rich_text(&file, html)?);
            Ok(ExitCode::SUCCESS)
        }
    }
}

async fn check(config: &CmsConfig, hosts: &[String], slug: &str) -> anyhow::Result<ExitCode> {
    println!("CMS base URL:   {}", or_unset(&config.base_url));
    println!("Site URL:       {}", or_unset(&config.site_url));
    println!("Default tenant: {}", config.tenant_slug);
    if !config.is_configured() {
        eprintln!("CMS_BASE_URL is not set, e.g. CMS_BASE_URL=https://cms.ftiaxesite.gr");
        return Ok(ExitCode::FAILURE);
    }

    let mut failures = 0usize;
    for host in hosts {
        println!("\nHost {host:?}");
        println!("{}", "-".repeat(50));

        let client = CmsClient::for_host(config, host)?;
        println!(
            "  tenant: {} (domain: {})",
            client.tenant_slug().unwrap_or("none"),
            client.tenant_domain().unwrap_or("not recognised")
        );

        match client.get_page(slug, RequestOptions::new()).await {
            Ok(result) => {
                for line in describe_pages(&result, slug) {
                    println!("  {line}");
                }
            }
            Err(err) => {
                failures += 1;
                println!("  error: {err:#}");
            }
        }
    }

    println!("\nTenant lookup");
    println!("{}", "-".repeat(50));
    let host = hosts.first().map_or("ftiaxesite.gr", String::as_str);
    let client = CmsClient::for_host(config, host)?;
    match client.get_tenant(RequestOptions::new()).await {
        Ok(result) => {
            for line in describe_tenants(&result) {
                println!("  {line}");
            }
        }
        Err(err) => {
            failures += 1;
            println!("  error: {err:#}");
        }
    }

    if failures > 0 {
        println!("\n{failures} request(s) failed");
        Ok(ExitCode::FAILURE)
    } else {
        println!("\nAll requests succeeded");
        Ok(ExitCode::SUCCESS)
    }
}

async fn tenant(config: &CmsConfig, host: &str) -> anyhow::Result<ExitCode> {
    let client = CmsClient::for_host(config, host)?;
    let result = client
        .get_tenant(RequestOptions::new())
        .await
        .with_context(|| format!("tenant lookup for {host} failed"))?;
    match result.into_first() {
        Some(tenant) => {
            println!("{}", serde_json::to_string_pretty(&tenant)?);
            Ok(ExitCode::SUCCESS)
        }
        None => {
            eprintln!("no tenant found for {host}");
            Ok(ExitCode::FAILURE)
        }
    }
}

/// Summary lines for a page query result.
pub fn describe_pages(result: &Paged<PageDocument>, slug: &str) -> Vec<String> {
    let mut lines = vec![format!("docs: {}", result.len())];
    let Some(page) = result.first() else {
        lines.push(format!("no page with slug {slug:?} for this tenant"));
        return lines;
    };

    lines.push(format!("slug: {}", page.slug.as_deref().unwrap_or("-")));
    lines.push(format!("title: {}", page.title.as_deref().unwrap_or("-")));
    lines.push(format!("type: {}", page.page_type.as_deref().unwrap_or("-")));

    let sections = page.sections();
    lines.push(format!("has sections: {}", sections.is_some()));
    for key in SECTION_KEYS {
        let present = sections.is_some_and(|s| s.get(*key).is_some_and(|v| !v.is_null()));
        lines.push(format!("has {key}: {present}"));
    }

    if let Some(subheadline) = sections
        .and_then(|s| s.get("hero"))
        .and_then(|hero| hero.get("subheadline"))
        .filter(|v| !v.is_null())
    {
        let kind = match RichText::from_value(subheadline) {
            RichText::Document(_) => "rich text",
            RichText::Plain(_) => "plain string",
            RichText::Empty => "unrecognised",
        };
        lines.push(format!("hero subheadline: {kind}"));
    }
    lines
}

/// Summary lines for a tenant query result.
pub fn describe_tenants(result: &Paged<TenantDocument>) -> Vec<String> {
    let mut lines = vec![format!("docs: {}", result.len())];
    match result.first() {
        Some(tenant) => {
            lines.push(format!("slug: {}", tenant.slug.as_deref().unwrap_or("-")));
            lines.push(format!("name: {}", tenant.name.as_deref().unwrap_or("-")));
            lines.push(format!("domain: {}", tenant.domain.as_deref().unwrap_or("not set")));
            lines.push(format!("template: {}", tenant.template.as_deref().unwrap_or("not set")));
        }
        None => lines.push("no tenant found".to_string()),
    }
    lines
}

pub fn describe_host(resolver: &TenantResolver, host: &str) -> String {
    let how = match HostMatch::classify(host) {
        HostMatch::Exact(_) => "exact",
        HostMatch::Brand(_) => "brand",
        HostMatch::Unknown => "default",
    };
    format!("{host} -> {} ({how})", resolver.resolve_slug(host))
}

/// Render a rich-text file. Files that are not JSON are treated as plain text.
pub fn convert_rich_text(path: &Path, html: bool) -> anyhow::Result<String> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let value = serde_json::from_str::<Value>(&raw).unwrap_or(Value::String(raw));
    let text = RichText::from_value(&value);
    Ok(if html { text.to_html() } else { text.to_plain_text() })
}

fn or_unset(value: &str) -> &str {
    if value.is_empty() {
        "NOT SET"
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io::Write;

    fn pages(docs: Value) -> Paged<PageDocument> {
        serde_json::from_value(json!({ "docs": docs })).unwrap()
    }

    #[test]
    fn describes_found_page() {
        let result = pages(json!([{
            "slug": "home",
            "title": "Αρχική",
            "pageType": "landing",
            "sections": {
                "hero": {"subheadline": {"root": {"children": []}}},
                "features": {},
                "footer": null
            }
        }]));
        let lines = describe_pages(&result, "home");
        assert_eq!(lines[0], "docs: 1");
        assert!(lines.contains(&"title: Αρχική".to_string()));
        assert!(lines.contains(&"type: landing".to_string()));
        assert!(lines.contains(&"has hero: true".to_string()));
        assert!(lines.contains(&"has features: true".to_string()));
        assert!(lines.contains(&"has footer: false".to_string()));
        assert!(lines.contains(&"has contact: false".to_string()));
        assert_eq!(lines.last().unwrap(), "hero subheadline: rich text");
    }

    #[test]
    fn describes_missing_page() {
        let lines = describe_pages(&pages(json!([])), "home");
        assert_eq!(lines, vec!["docs: 0", "no page with slug \"home\" for this tenant"]);
    }

    #[test]
    fn describes_tenants() {
        let result: Paged<TenantDocument> = serde_json::from_value(json!({
            "docs": [{"slug": "ftiaxesite", "name": "Ftiaxesite"}]
        }))
        .unwrap();
        let lines = describe_tenants(&result);
        assert!(lines.contains(&"domain: not set".to_string()));
        assert!(lines.contains(&"name: Ftiaxesite".to_string()));
    }

    #[test]
    fn describes_host_resolution() {
        let resolver = TenantResolver::default();
        assert_eq!(
            describe_host(&resolver, "www.ftiaxesite.gr"),
            "www.ftiaxesite.gr -> ftiaxesite (exact)"
        );
        assert_eq!(
            describe_host(&resolver, "preview.kalitechnia.net"),
            "preview.kalitechnia.net -> kallitechnia (brand)"
        );
        assert_eq!(describe_host(&resolver, "example.com"), "example.com -> ftiaxesite (default)");
    }

    #[test]
    fn converts_rich_text_files() {
        let dir = std::env::temp_dir();
        let path = dir.join(format!("site-content-richtext-{}.json", std::process::id()));
        let doc = json!({"root": {"children": [
            {"type": "paragraph", "children": [{"type": "text", "text": "Γεια", "format": 1}]}
        ]}});
        std::fs::File::create(&path)
            .unwrap()
            .write_all(doc.to_string().as_bytes())
            .unwrap();

        assert_eq!(convert_rich_text(&path, false).unwrap(), "Γεια");
        assert_eq!(convert_rich_text(&path, true).unwrap(), "<p><strong>Γεια</strong></p>");
        std::fs::remove_file(&path).unwrap();

        assert!(convert_rich_text(Path::new("/nonexistent/rich.json"), false).is_err());
    }
}
