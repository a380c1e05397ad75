//! Stylesheet generation.
//!
//! The palette comes in through [`Theme`] and lands in a `:root` custom
//! property block; the static rules below only ever reference the custom
//! properties, so retheming the site is a one-line change at the call site.

use folio_core::Theme;

pub fn stylesheet(theme: &Theme) -> String {
    format!(
        ":root {{\n\
         \x20 --bg: {bg};\n\
         \x20 --surface: {surface};\n\
         \x20 --ink: {ink};\n\
         \x20 --heading: {heading};\n\
         \x20 --muted: {muted};\n\
         \x20 --accent: {accent};\n\
         \x20 --accent-hover: {accent_hover};\n\
         \x20 --accent-strong: {accent_strong};\n\
         \x20 --on-accent: {on_accent};\n\
         \x20 --outline: {outline};\n\
         \x20 --glow: {glow};\n\
         }}\n\n{STATIC_RULES}",
        bg = theme.background.css(),
        surface = theme.surface.css(),
        ink = theme.on_surface.css(),
        heading = theme.heading.css(),
        muted = theme.muted.css(),
        accent = theme.accent.css(),
        accent_hover = theme.accent_hover.css(),
        accent_strong = theme.accent_strong.css(),
        on_accent = theme.on_accent.css(),
        outline = theme.outline.css(),
        glow = theme.glow.css(),
    )
}

const STATIC_RULES: &str = "\
* { box-sizing: border-box; }

html { scroll-behavior: smooth; }

body {
  margin: 0;
  background: var(--bg);
  color: var(--ink);
  font-family: system-ui, -apple-system, 'Segoe UI', sans-serif;
  line-height: 1.6;
}

h1, h2, h3, h4 { color: var(--heading); line-height: 1.2; }
h1 { font-size: 3.2rem; margin: 0 0 1.5rem; }
h2 { font-size: 2.2rem; margin: 0 0 2rem; }
h3 { font-size: 1.3rem; color: var(--accent); margin: 0 0 0.75rem; }
h4 {
  font-size: 0.85rem;
  color: var(--muted);
  text-transform: uppercase;
  letter-spacing: 0.08em;
  margin: 0 0 0.75rem;
}

.topbar {
  position: fixed;
  top: 0;
  left: 0;
  right: 0;
  z-index: 40;
  display: flex;
  align-items: center;
  gap: 2rem;
  padding: 1rem 2rem;
  background: color-mix(in srgb, var(--bg) 80%, transparent);
  backdrop-filter: blur(12px);
  border-bottom: 1px solid var(--outline);
}

.brand {
  margin-right: auto;
  border: 0;
  background: none;
  color: var(--accent);
  font-size: 1.25rem;
  font-weight: 600;
  cursor: pointer;
  transition: color 0.2s;
}
.brand:hover { color: var(--accent-hover); }

.nav-link {
  color: var(--muted);
  text-decoration: none;
  text-transform: capitalize;
  padding-bottom: 0.25rem;
  border-bottom: 2px solid transparent;
  transition: color 0.2s;
}
.nav-link:hover { color: var(--ink); }
.nav-link.active {
  color: var(--accent);
  border-bottom-color: var(--accent);
}

section {
  max-width: 72rem;
  margin: 0 auto;
  padding: 8rem 2rem;
}
section#home {
  min-height: 100vh;
  display: flex;
  flex-direction: column;
  justify-content: center;
  padding-top: 5rem;
}

.hero-role { font-size: 1.8rem; color: var(--muted); margin: 0 0 1.5rem; }
.hero-lead { font-size: 1.3rem; max-width: 42rem; margin: 0 0 2rem; }

.row { display: flex; flex-wrap: wrap; gap: 1rem; align-items: center; }

.btn {
  padding: 0.75rem 1.5rem;
  border-radius: 0.5rem;
  font-size: 1rem;
  cursor: pointer;
  transition: background 0.2s, border-color 0.2s;
}
.btn-accent {
  background: var(--accent-strong);
  border: 1px solid var(--accent-strong);
  color: var(--on-accent);
  font-weight: 500;
}
.btn-accent:hover { background: var(--accent); border-color: var(--accent); }
.btn-outline {
  background: none;
  border: 1px solid var(--outline);
  color: var(--ink);
}
.btn-outline:hover { border-color: var(--accent); }

.divider {
  height: 1px;
  background: linear-gradient(to right, transparent, var(--accent-strong), transparent);
  box-shadow: 0 0 8px var(--glow);
}

.card {
  border: 1px solid var(--outline);
  border-radius: 0.75rem;
  padding: 2rem;
  margin-bottom: 2rem;
  background: color-mix(in srgb, var(--surface) 50%, transparent);
  transition: border-color 0.3s, box-shadow 0.3s;
}
.card:hover {
  border-color: var(--accent-strong);
  box-shadow: 0 0 25px var(--glow);
}
.card .date { color: var(--muted); font-size: 0.9rem; }

.chip {
  display: inline-block;
  padding: 0.35rem 0.85rem;
  border: 1px solid var(--outline);
  border-radius: 0.375rem;
  background: var(--surface);
  color: var(--ink);
  font-size: 0.9rem;
  transition: border-color 0.2s, box-shadow 0.2s;
}
.chip:hover { border-color: var(--accent-strong); box-shadow: 0 0 10px var(--glow); }

ul { list-style: none; padding: 0; margin: 0 0 1.5rem; }
li { padding-left: 1.25rem; position: relative; margin-bottom: 0.5rem; }
li::before { content: '\\2192'; color: var(--accent); position: absolute; left: 0; }

.muted { color: var(--muted); }
.portrait {
  width: 300px;
  max-width: 100%;
  aspect-ratio: 1;
  object-fit: cover;
  border-radius: 1rem;
  border: 1px solid var(--outline);
  box-shadow: 0 0 20px var(--glow);
}

.contact-link {
  display: flex;
  gap: 1rem;
  padding: 1rem;
  margin-bottom: 1rem;
  max-width: 36rem;
  border: 1px solid var(--outline);
  border-radius: 0.5rem;
  color: var(--ink);
  text-decoration: none;
  transition: border-color 0.2s, background 0.2s;
}
.contact-link:hover {
  border-color: var(--accent-strong);
  background: color-mix(in srgb, var(--surface) 50%, transparent);
}

footer {
  display: flex;
  flex-wrap: wrap;
  gap: 1rem;
  justify-content: space-between;
  padding: 2rem;
  border-top: 1px solid var(--outline);
  color: var(--muted);
  font-size: 0.9rem;
}
footer p { margin: 0; }
footer a { color: var(--muted); transition: color 0.2s; }
footer a:hover { color: var(--accent); }

@media (max-width: 640px) {
  h1 { font-size: 2.2rem; }
  .topbar { gap: 1rem; padding: 1rem; }
  section { padding: 5rem 1.25rem; }
}
";
