//! Page renderer
//!
//! Renders the portfolio page to HTML from the profile and the current
//! feed state. All dynamic text goes through `escape`.

use chrono::{DateTime, Datelike, Utc};

use crate::domain::entities::{Certificate, LoadState, Profile, RepositorySummary};

const STYLE: &str = "\
body{margin:0;min-height:100vh;font-family:system-ui,sans-serif;color:#f4f4f5;\
background:linear-gradient(to bottom,#0b1020,#070a12,#05060b)}\
main{max-width:64rem;margin:0 auto;padding:2.5rem 1.5rem}\
section{margin-top:3rem}\
h1{font-size:2.5rem;margin:0}\
.sub{color:#d4d4d8}.muted{color:#a1a1aa}\
.card{background:rgba(255,255,255,.05);border:1px solid rgba(255,255,255,.1);\
border-radius:1rem;padding:1.25rem}\
.grid{display:grid;gap:1rem;grid-template-columns:repeat(auto-fill,minmax(18rem,1fr))}\
.badge{display:inline-block;padding:.15rem .6rem;margin:.15rem;border-radius:9999px;\
background:rgba(255,255,255,.1);font-size:.8rem}\
.button{display:inline-block;padding:.4rem .9rem;margin:.25rem;border-radius:.6rem;\
border:1px solid rgba(255,255,255,.2);color:#f4f4f5;text-decoration:none}\
header{text-align:center}footer{margin-top:3rem;text-align:center}";

const MONTHS_NL: [&str; 12] = [
    "jan", "feb", "mrt", "apr", "mei", "jun", "jul", "aug", "sep", "okt", "nov", "dec",
];

/// Render the complete page
pub fn render_page(profile: &Profile, projects: &LoadState, year: i32) -> String {
    let mut buf = String::new();

    buf.push_str("<!DOCTYPE html>\n<html lang=\"nl\">\n<head>\n");
    buf.push_str("<meta charset=\"utf-8\">\n");
    buf.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    buf.push_str(&format!("<title>{}</title>\n", escape(&profile.name)));
    buf.push_str(&format!("<style>{}</style>\n", STYLE));
    buf.push_str("</head>\n<body>\n<main>\n");

    buf.push_str(&render_header(profile));
    buf.push_str(&render_about(profile));
    buf.push_str(&render_projects(profile, projects));
    buf.push_str(&render_certificates(&profile.certificates));
    buf.push_str(&render_contact(profile));

    buf.push_str(&format!(
        "<footer class=\"muted\">&copy; {} {} &bull; Built with Rust</footer>\n",
        year,
        escape(&profile.name)
    ));
    buf.push_str("</main>\n</body>\n</html>\n");

    buf
}

fn render_header(profile: &Profile) -> String {
    let mut buf = String::from("<header>\n");
    buf.push_str(&format!("<h1>{}</h1>\n", escape(&profile.name)));
    buf.push_str(&format!("<p class=\"sub\">{}</p>\n", escape(&profile.tagline)));
    buf.push_str(&format!(
        "<p class=\"muted\">{}</p>\n",
        escape(&profile.location)
    ));
    buf.push_str("<nav>\n");
    buf.push_str("<a class=\"button\" href=\"#contact\">Contact</a>\n");
    buf.push_str("<a class=\"button\" href=\"/cv.pdf\" download>Download CV</a>\n");
    buf.push_str(&external_link("button", &profile.github_url, "GitHub"));
    buf.push_str(&external_link("button", &profile.linkedin_url, "LinkedIn"));
    buf.push_str("</nav>\n</header>\n");
    buf
}

fn render_about(profile: &Profile) -> String {
    let mut buf = String::from("<section id=\"about\" class=\"card\">\n<h2>Over mij</h2>\n");
    buf.push_str(&format!("<p class=\"sub\">{}</p>\n", escape(&profile.about)));
    if !profile.skills.is_empty() {
        buf.push_str("<div>\n");
        for skill in &profile.skills {
            buf.push_str(&format!("<span class=\"badge\">{}</span>\n", escape(skill)));
        }
        buf.push_str("</div>\n");
    }
    buf.push_str("</section>\n");
    buf
}

fn render_projects(profile: &Profile, projects: &LoadState) -> String {
    let mut buf = String::from("<section id=\"projects\">\n<h2>Projecten</h2>\n");
    buf.push_str(&format!(
        "<p class=\"muted\">Automatisch geladen vanaf GitHub ({})</p>\n",
        escape(&profile.github_username)
    ));
    buf.push_str(&external_link(
        "button",
        &profile.repositories_url(),
        "Alle repos",
    ));

    match projects {
        LoadState::Loading => {
            buf.push_str("<div class=\"card muted\">Projecten laden&hellip;</div>\n");
        }
        LoadState::Error { message } => {
            buf.push_str("<div class=\"card\">\n");
            buf.push_str(&format!(
                "<p>Kon GitHub projecten niet laden: <span class=\"muted\">{}</span></p>\n",
                escape(message)
            ));
            buf.push_str(&external_link(
                "button",
                &profile.github_url,
                "Open GitHub profiel",
            ));
            buf.push_str("</div>\n");
        }
        LoadState::Ready { items } => {
            buf.push_str("<div class=\"grid\">\n");
            for repo in items {
                buf.push_str(&render_repo(repo));
            }
            buf.push_str("</div>\n");
        }
    }

    buf.push_str("</section>\n");
    buf
}

fn render_repo(repo: &RepositorySummary) -> String {
    let mut buf = String::from("<article class=\"card\">\n");

    buf.push_str(&format!("<h3>{}", escape(&repo.name)));
    if let Some(language) = &repo.language {
        buf.push_str(&format!(" <span class=\"badge\">{}</span>", escape(language)));
    }
    buf.push_str("</h3>\n");

    let description = repo
        .description
        .as_deref()
        .unwrap_or("Geen beschrijving toegevoegd.");
    buf.push_str(&format!("<p class=\"sub\">{}</p>\n", escape(description)));

    buf.push_str(&format!(
        "<p class=\"muted\"><span>&#11088; {} &bull; &#127860; {}</span> <span>Updated: {}</span></p>\n",
        repo.stargazers_count,
        repo.forks_count,
        format_month(&repo.updated_at)
    ));

    buf.push_str(&external_link("button", &repo.html_url, "GitHub"));
    if let Some(live) = repo.live_url() {
        buf.push_str(&external_link("button", live, "Live"));
    }

    buf.push_str("</article>\n");
    buf
}

fn render_certificates(certificates: &[Certificate]) -> String {
    let mut buf = String::from("<section id=\"certificates\">\n<h2>Certificaten</h2>\n");
    buf.push_str("<div class=\"grid\">\n");
    for certificate in certificates {
        buf.push_str("<article class=\"card\">\n");
        buf.push_str(&format!("<h3>{}</h3>\n", escape(&certificate.title)));
        buf.push_str(&format!(
            "<p class=\"muted\">{} &bull; {}</p>\n",
            escape(&certificate.issuer),
            escape(&certificate.year)
        ));
        buf.push_str(&external_link(
            "button",
            &certificate.credential_url,
            "Bekijk credential",
        ));
        buf.push_str("</article>\n");
    }
    buf.push_str("</div>\n</section>\n");
    buf
}

fn render_contact(profile: &Profile) -> String {
    format!(
        "<section id=\"contact\" class=\"card\">\n<h2>Contact</h2>\n\
         <p>&#128231; <a href=\"mailto:{email}\">{email}</a></p>\n</section>\n",
        email = escape(&profile.email)
    )
}

fn external_link(class: &str, href: &str, label: &str) -> String {
    format!(
        "<a class=\"{}\" href=\"{}\" target=\"_blank\" rel=\"noreferrer noopener\">{}</a>\n",
        class,
        escape(href),
        escape(label)
    )
}

/// Short Dutch month and year, e.g. "dec 2025"
pub fn format_month(date: &DateTime<Utc>) -> String {
    format!("{} {}", MONTHS_NL[date.month0() as usize], date.year())
}

/// Escape text for use in HTML content and attribute values
fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
