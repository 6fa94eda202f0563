// ABOUTME: Pure text rendering of the project folder tree shown next to each wizard screen
// ABOUTME: Output is fitted to the viewport so it can be memoized per (config, width, height)

use crate::models::{AppKind, Architecture, CiProvider, ProjectConfig};

pub const STRUCTURE_HEADER: &str = "📁 Project Structure";
pub const EMPTY_STRUCTURE_MESSAGE: &str = "⚡ Make selections to see\nyour project structure";

/// Borders, header and the help line
const PANEL_CHROME_LINES: u16 = 6;

/// Folder an application lands in under `apps/`
pub const fn app_folder_name(kind: AppKind) -> &'static str {
    kind.default_name()
}

/// Width and height available to the tree for a given terminal size.
/// Zero means unconstrained.
pub fn panel_size(width: u16, height: u16) -> (u16, u16) {
    let panel_width = if width == 0 {
        0
    } else {
        // right 40% of the terminal
        (width / 5 * 2).max(20)
    };
    let panel_height = if height == 0 {
        0
    } else {
        height.saturating_sub(PANEL_CHROME_LINES).max(5)
    };
    (panel_width, panel_height)
}

fn tree_lines(project: &ProjectConfig) -> Vec<String> {
    let mut lines = vec![format!("📁 {}/", project.name)];

    if !project.applications.is_empty() {
        lines.push("  📁 apps/".to_string());
        for app in &project.applications {
            lines.push(format!("    📁 {}/", app_folder_name(app.kind)));
            lines.push("      📄 package.json".to_string());
            match app.kind {
                AppKind::Next => lines.push("      ⚙️ next.config.js".to_string()),
                AppKind::Expo => lines.push("      ⚙️ metro.config.js".to_string()),
                _ => {}
            }
            lines.push("      📁 src/".to_string());
        }
    }

    if project.ci_pipeline.provider == Some(CiProvider::Github) {
        lines.push("  📁 .github/".to_string());
        lines.push("    📁 workflows/".to_string());
        lines.push("      🔧 ci.yml".to_string());
    }

    let infra = &project.infrastructure;
    if infra.docker_compose {
        lines.push("  🐳 docker-compose.yml".to_string());
    }
    if infra.docker {
        lines.push("  🐳 Dockerfile".to_string());
    }

    match project.architecture {
        Architecture::Nx => lines.push("  ⚙️ nx.json".to_string()),
        Architecture::Turborepo => lines.push("  ⚙️ turbo.json".to_string()),
        Architecture::Single => {}
    }

    lines.push("  📄 package.json".to_string());
    lines.push("  📄 .gitignore".to_string());
    lines.push("  📖 README.md".to_string());
    lines
}

fn clip(line: &str, width: u16) -> String {
    if width == 0 || line.chars().count() <= usize::from(width) {
        return line.to_string();
    }
    let keep = usize::from(width).saturating_sub(1);
    let mut clipped: String = line.chars().take(keep).collect();
    clipped.push('…');
    clipped
}

/// Renders the folder tree for `project` inside a `width` x `height`
/// terminal. Lines past the panel height collapse into a "more" marker.
pub fn render_structure(project: &ProjectConfig, width: u16, height: u16) -> String {
    let (panel_width, panel_height) = panel_size(width, height);

    let body: Vec<String> = if project.name.is_empty() {
        EMPTY_STRUCTURE_MESSAGE.lines().map(str::to_string).collect()
    } else {
        tree_lines(project)
    };

    let limit = if panel_height == 0 {
        usize::MAX
    } else {
        usize::from(panel_height)
    };

    let mut out = vec![clip(STRUCTURE_HEADER, panel_width), String::new()];
    if body.len() > limit {
        let hidden = body.len() - limit + 1;
        out.extend(body.iter().take(limit - 1).map(|l| clip(l, panel_width)));
        out.push(clip(&format!("  … {hidden} more"), panel_width));
    } else {
        out.extend(body.iter().map(|l| clip(l, panel_width)));
    }
    out.join("\n")
}
