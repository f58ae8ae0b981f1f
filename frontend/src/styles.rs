//! Stylesheets generated with stylist. The deck is otherwise plain class
//! names, so everything shared lives in [`GLOBAL_CSS`].

use stylist::{GlobalStyle, Style};

const GLOBAL_CSS: &str = r#"
    html { scroll-behavior: smooth; }
    body {
        margin: 0;
        background: #0f172a;
        color: #e2e8f0;
        font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
    }
    html[dir="rtl"] body { font-family: "Cairo", "Segoe UI", Tahoma, sans-serif; }
    a { color: inherit; }
    .container { max-width: 1200px; margin: 0 auto; padding: 0 24px; }
    .section { padding: 96px 0; }
    .section-title { text-align: center; margin-bottom: 48px; }
    .section-title .pre-title { color: #517ae5; font-weight: 600; letter-spacing: 0.08em; text-transform: uppercase; }
    .section-title h2 { font-size: 2.5rem; margin: 8px 0; }
    .section-title p { color: #94a3b8; max-width: 720px; margin: 0 auto; }
    .glass {
        background: rgba(30, 41, 59, 0.55);
        border: 1px solid rgba(148, 163, 184, 0.15);
        border-radius: 16px;
        backdrop-filter: blur(12px);
        padding: 24px;
    }
    .fade-in-section.glass { margin-bottom: 32px; }
    .grid { display: grid; gap: 24px; }
    .grid-2 { grid-template-columns: repeat(auto-fit, minmax(280px, 1fr)); }
    .grid-3 { grid-template-columns: repeat(auto-fit, minmax(240px, 1fr)); }
    .grid-4 { grid-template-columns: repeat(auto-fit, minmax(200px, 1fr)); }
    .stat-value { font-size: 2.25rem; font-weight: 700; color: #ffffff; }
    .stat-label { color: #94a3b8; }
    .positive { color: #4ade80; }
    .negative { color: #f87171; }
    .button {
        display: inline-block;
        background: #517ae5;
        color: #ffffff;
        border: none;
        border-radius: 8px;
        padding: 12px 28px;
        font-weight: 600;
        text-decoration: none;
        cursor: pointer;
    }
    .button:hover { background: #4367c6; }
    .button.outline { background: transparent; border: 2px solid #64748b; }
    .fade-in-section {
        opacity: 0;
        transform: translateY(20px);
        transition: opacity 0.6s ease-out, transform 0.6s ease-out;
    }
    .fade-in-section.is-visible { opacity: 1; transform: none; }
    .top-nav {
        position: fixed;
        inset: 0 0 auto 0;
        z-index: 40;
        transition: background 0.3s ease;
    }
    .top-nav.scrolled { background: rgba(15, 23, 42, 0.9); backdrop-filter: blur(8px); }
    .nav-content { display: flex; align-items: center; justify-content: space-between; padding: 16px 24px; }
    .nav-logo { font-size: 1.5rem; font-weight: 700; text-decoration: none; }
    .nav-links { display: flex; gap: 20px; align-items: center; }
    .nav-link { color: #cbd5e1; text-decoration: none; background: none; border: none; cursor: pointer; font: inherit; }
    .nav-link:hover { color: #ffffff; }
    .burger-menu { display: none; background: none; border: none; color: inherit; font-size: 1.5rem; }
    .toggle-group { display: inline-flex; border: 1px solid #334155; border-radius: 8px; overflow: hidden; }
    .toggle-group button { background: none; border: none; color: #94a3b8; padding: 6px 10px; cursor: pointer; }
    .toggle-group button.active { background: #517ae5; color: #ffffff; }
    .tabs { display: flex; justify-content: center; gap: 8px; margin-bottom: 32px; }
    .tabs button { background: #1e293b; color: #cbd5e1; border: none; border-radius: 999px; padding: 8px 20px; cursor: pointer; }
    .tabs button.active { background: #517ae5; color: #ffffff; }
    .chart-canvas { width: 100%; height: 320px; }
    .badge { font-size: 0.7rem; background: #f59e0b; color: #0f172a; border-radius: 999px; padding: 2px 8px; margin-inline-start: 8px; }
    .fund-bar { background: #334155; border-radius: 999px; height: 12px; overflow: hidden; }
    .fund-bar > div { height: 100%; border-radius: 999px; transition: width 0.5s; }
    table.data-table { width: 100%; border-collapse: collapse; }
    table.data-table th, table.data-table td { padding: 10px 12px; border-bottom: 1px solid #334155; text-align: start; }
    dl.terms { display: grid; grid-template-columns: auto 1fr; gap: 14px 16px; }
    dl.terms dt { color: #94a3b8; }
    dl.terms dd { margin: 0; text-align: end; font-size: 1.25rem; font-weight: 600; }
    .risk-chip { border-radius: 999px; padding: 2px 10px; font-size: 0.8rem; }
    .risk-low { background: rgba(74, 222, 128, 0.2); color: #4ade80; }
    .risk-medium { background: rgba(250, 204, 21, 0.2); color: #facc15; }
    .risk-high { background: rgba(248, 113, 113, 0.2); color: #f87171; }
    footer { padding: 32px 0; text-align: center; color: #94a3b8; border-top: 1px solid #1e293b; }
    @media (max-width: 768px) {
        .burger-menu { display: block; }
        .nav-links { display: none; }
        .nav-links.mobile-menu-open {
            display: flex;
            flex-direction: column;
            position: absolute;
            top: 64px;
            inset-inline: 0;
            background: rgba(15, 23, 42, 0.97);
            padding: 16px;
        }
    }
    @media print {
        .no-print { display: none !important; }
        .fade-in-section { opacity: 1; transform: none; }
    }
"#;

const PLAYER_CSS: &str = r#"
    position: relative;
    width: min(520px, 92vw);
    background: #1e293b;
    border-radius: 16px;
    padding: 24px;
    box-shadow: 0 24px 48px rgba(0, 0, 0, 0.4);

    .player-header { display: flex; justify-content: space-between; align-items: flex-start; gap: 12px; }
    .player-header small { color: #94a3b8; text-transform: uppercase; letter-spacing: 0.08em; }
    .player-header h3 { margin: 4px 0 16px; }
    .close { background: none; border: none; color: #94a3b8; font-size: 1.5rem; cursor: pointer; }
    .times { display: flex; justify-content: space-between; font-size: 0.8rem; color: #94a3b8; }
    .controls { display: flex; align-items: center; justify-content: center; gap: 16px; margin: 16px 0; }
    .controls button {
        background: none;
        border: none;
        color: #e2e8f0;
        font-size: 1.25rem;
        cursor: pointer;
    }
    .controls button.play {
        width: 56px;
        height: 56px;
        border-radius: 50%;
        background: #517ae5;
    }
    .controls button:disabled { opacity: 0.4; cursor: not-allowed; }
    .volume { display: flex; align-items: center; gap: 8px; }
    .volume button { background: none; border: none; color: inherit; cursor: pointer; font-size: 1.1rem; }

    input[type="range"] {
        -webkit-appearance: none;
        appearance: none;
        width: 100%;
        height: 6px;
        border-radius: 999px;
        background: #475569;
        outline: none;
    }
    input[type="range"].progress {
        background: linear-gradient(to right, #517ae5 var(--fill), #475569 var(--fill));
    }
    input[type="range"].volume-slider {
        width: 96px;
        background: linear-gradient(to right, #e2e8f0 var(--fill), #475569 var(--fill));
    }
    input[type="range"]::-webkit-slider-thumb {
        -webkit-appearance: none;
        width: 14px;
        height: 14px;
        border-radius: 50%;
        background: #ffffff;
        cursor: pointer;
    }
    input[type="range"]::-moz-range-thumb {
        width: 14px;
        height: 14px;
        border: none;
        border-radius: 50%;
        background: #ffffff;
        cursor: pointer;
    }
    input[type="range"]:disabled { opacity: 0.5; }
"#;

/// Registers the page-wide stylesheet. Keep the returned handle alive for as
/// long as the styles should apply.
pub fn global_style() -> Option<GlobalStyle> {
    match GlobalStyle::new(GLOBAL_CSS) {
        Ok(style) => Some(style),
        Err(err) => {
            log::error!("Failed to build global stylesheet: {}", err);
            None
        }
    }
}

pub fn player_style() -> Option<Style> {
    match Style::new(PLAYER_CSS) {
        Ok(style) => Some(style),
        Err(err) => {
            log::error!("Failed to build player stylesheet: {}", err);
            None
        }
    }
}
