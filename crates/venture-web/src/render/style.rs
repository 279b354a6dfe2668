/// Page stylesheet, inlined into every response.
pub const CSS: &str = r##"
* { box-sizing: border-box; }
body { margin: 0; display: flex; font-family: system-ui, -apple-system, "Segoe UI", sans-serif; color: #262730; background: #fff; }
main { flex: 1; padding: 2rem 3rem; max-width: 1100px; }
.sidebar { width: 280px; min-height: 100vh; padding: 1.5rem; background: #f0f2f6; }
.sidebar h2 { font-size: 1.1rem; }
.debug { font-size: 0.85rem; color: #555; }
.debug ul { padding-left: 1rem; list-style: none; }
.main-header { font-size: 2.5rem; color: #1f77b4; text-align: center; margin-bottom: 2rem; }
.section-header { font-size: 1.5rem; color: #ff7f0e; margin: 1.5rem 0 1rem; }
.tabs { display: flex; gap: 1rem; border-bottom: 1px solid #ddd; margin-bottom: 1rem; }
.tabs a { padding: 0.5rem 1rem; text-decoration: none; color: #262730; }
.tabs a:hover { color: #ff4b4b; }
.grid { display: grid; grid-template-columns: 1fr; gap: 0.4rem; max-width: 640px; }
input, select, textarea { padding: 0.5rem; font: inherit; border: 1px solid #ccc; border-radius: 6px; }
textarea { min-height: 90px; }
button { margin-top: 0.6rem; padding: 0.6rem 1rem; font: inherit; border: 0; border-radius: 6px; background: #ff4b4b; color: #fff; cursor: pointer; }
button[disabled] { background: #bbb; cursor: not-allowed; }
.idea-card { background: linear-gradient(135deg, #667eea 0%, #764ba2 100%); padding: 1.5rem; border-radius: 10px; color: #fff; margin: 1rem 0; }
.idea-card button { background: rgba(255, 255, 255, 0.2); }
.validation-card { background: linear-gradient(135deg, #f093fb 0%, #f5576c 100%); padding: 1.5rem; border-radius: 10px; color: #fff; margin: 1rem 0; }
.notice { padding: 0.8rem 1rem; border-radius: 6px; margin: 0.8rem 0; }
.notice.info { background: #e8f0fe; color: #0b4a8b; }
.notice.warning { background: #fff8e1; color: #8a6d00; }
.notice.error { background: #fdecea; color: #8b1a1a; }
.notice.success { background: #e6f4ea; color: #1e6b34; }
.notice pre { white-space: pre-wrap; background: rgba(0, 0, 0, 0.05); padding: 0.5rem; }
.hint { font-size: 0.9rem; color: #555; }
.metrics, .columns, .swot { display: grid; gap: 1rem; }
.metrics { grid-template-columns: repeat(3, 1fr); }
.columns { grid-template-columns: repeat(auto-fit, minmax(260px, 1fr)); }
.swot { grid-template-columns: repeat(2, 1fr); }
.metric { padding: 1rem; border-radius: 8px; background: #f0f2f6; }
.metric span { display: block; font-size: 0.85rem; color: #555; }
.metric b { font-size: 1.8rem; }
.swot ul, .columns ul { padding-left: 1rem; list-style: none; }
figure { margin: 1rem 0; }
figcaption { font-weight: 600; margin-bottom: 0.4rem; }
footer { margin-top: 3rem; color: #888; text-align: center; font-size: 0.85rem; }
"##;
