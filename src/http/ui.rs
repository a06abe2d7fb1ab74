//! Dashboard HTML.

use crate::{app::AppState, dashboard, errors::DashboardError, store::LogSource, util::html_escape};
use axum::{extract::State, response::Html};

pub const PAGE_TITLE: &str = "API Log Monitoring Dashboard";

pub async fn ui_index(State(state): State<AppState>) -> Result<Html<String>, DashboardError> {
  let rows = state.logs.load_all().await?;
  let options = dashboard::filter_options(&rows);

  let mut endpoint_options = String::new();
  for ep in &options.endpoints {
    let ep = html_escape(ep);
    endpoint_options.push_str(&format!("<option value=\"{ep}\">{ep}</option>"));
  }
  let start = html_escape(options.start_date.as_deref().unwrap_or_default());
  let end = html_escape(options.end_date.as_deref().unwrap_or_default());

  let template = r#"<!doctype html>
<html lang="en">
<head>
  <meta charset="utf-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1" />
  <title>__TITLE__</title>
  <style>
    body { font-family: system-ui, sans-serif; margin: 2rem; }
    h1 { text-align: center; }
    .filters { padding: 20px; display: flex; gap: 10px; flex-wrap: wrap; }
    .filters select { width: 30%; }
    .kpis { display: flex; justify-content: space-around; margin-top: 20px; }
    .kpi { padding: 10px; border-radius: 5px; width: 20%; text-align: center; }
    .kpi.total { border: 1px solid gray; }
    .kpi.success { border: 1px solid green; }
    .kpi.failure { border: 1px solid red; }
    .legend span { margin-right: 1rem; }
    table { width: 100%; border-collapse: collapse; }
    th, td { border-bottom: 1px solid #ddd; text-align: left; padding: .5rem; }
    tr.selected { background: #eef5ff; }
    tbody tr { cursor: pointer; }
    .pager { margin: .5rem 0; }
    #detail { padding: 20px; margin-top: 20px; border: 1px solid #ccc; }
    pre { white-space: pre-wrap; }
  </style>
</head>
<body>
  <h1>__TITLE__</h1>
  <div class="filters">
    <select id="endpoint"><option value="">Select API Endpoint</option>__ENDPOINT_OPTIONS__</select>
    <select id="status">
      <option value="">Select Status</option>
      <option value="success">Success (2xx)</option>
      <option value="failure">Failure (4xx/5xx)</option>
    </select>
    <input id="start_date" value="__START__" placeholder="start (YYYY-MM-DD)" />
    <input id="end_date" value="__END__" placeholder="end (YYYY-MM-DD)" />
  </div>

  <div class="kpis">
    <div class="kpi total"><h3>Total Requests</h3><p id="kpi-total">0</p></div>
    <div class="kpi success"><h3>Success Requests</h3><p id="kpi-success">0</p></div>
    <div class="kpi failure"><h3>Failed Requests</h3><p id="kpi-failure">0</p></div>
  </div>

  <h2>Request Trend Over Time</h2>
  <svg id="trend" width="100%" height="260" viewBox="0 0 1000 260" preserveAspectRatio="none"></svg>
  <div id="legend" class="legend"></div>

  <h2>Logs</h2>
  <table>
    <thead><tr><th>Timestamp</th><th>API Endpoint</th><th>Status Code</th></tr></thead>
    <tbody id="rows"></tbody>
  </table>
  <div class="pager">
    <button id="prev">&lt;</button> <span id="page"></span> <button id="next">&gt;</button>
  </div>

  <div id="detail">Select a log row to see full details.</div>

  <script>
    const PAGE_SIZE = 10;
    const BUCKETS = 50;
    const COLORS = ['#636efa', '#ef553b', '#00cc96', '#ab63fa', '#ffa15a', '#19d3f3', '#ff6692'];
    let rows = [];
    let page = 0;
    let selectedId = null;

    function esc(s) {
      return String(s).replace(/&/g, '&amp;').replace(/</g, '&lt;').replace(/>/g, '&gt;');
    }

    async function refresh() {
      const params = new URLSearchParams();
      for (const id of ['endpoint', 'status', 'start_date', 'end_date']) {
        const v = document.getElementById(id).value;
        if (v) params.set(id, v);
      }
      const res = await fetch('/api/dashboard?' + params.toString());
      const view = await res.json();
      document.getElementById('kpi-total').textContent = view.kpis.total;
      document.getElementById('kpi-success').textContent = view.kpis.success;
      document.getElementById('kpi-failure').textContent = view.kpis.failure;
      drawTrend(view.trend);
      rows = view.rows;
      page = 0;
      if (selectedId !== null && !rows.some(r => r.id === selectedId)) {
        select(null);
      }
      drawTable();
    }

    function drawTrend(trend) {
      const svg = document.getElementById('trend');
      const codes = [...new Set(trend.map(b => b.status_code))].sort((a, b) => a - b);
      const totals = new Array(BUCKETS).fill(0);
      trend.forEach(b => { totals[b.bucket] += b.count; });
      const max = Math.max(1, ...totals);
      const slot = 1000 / BUCKETS;
      const width = slot * 0.8;
      const offsets = new Array(BUCKETS).fill(0);
      let out = '';
      for (const code of codes) {
        const color = COLORS[codes.indexOf(code) % COLORS.length];
        trend.filter(b => b.status_code === code).forEach(b => {
          const h = b.count / max * 240;
          offsets[b.bucket] += h;
          const y = 250 - offsets[b.bucket];
          out += '<rect x="' + (b.bucket * slot + slot * 0.1) + '" y="' + y + '" width="' + width +
            '" height="' + h + '" fill="' + color + '"><title>' + esc(b.start) + ' – ' + esc(b.end) +
            '\n' + code + ': ' + b.count + '</title></rect>';
        });
      }
      svg.innerHTML = out;
      document.getElementById('legend').innerHTML = codes.map(code =>
        '<span style="color:' + COLORS[codes.indexOf(code) % COLORS.length] + '">&#9632; ' + code + '</span>'
      ).join('');
    }

    function drawTable() {
      const pages = Math.max(1, Math.ceil(rows.length / PAGE_SIZE));
      const slice = rows.slice(page * PAGE_SIZE, (page + 1) * PAGE_SIZE);
      document.getElementById('rows').innerHTML = slice.map(r =>
        '<tr data-id="' + r.id + '"' + (r.id === selectedId ? ' class="selected"' : '') + '><td>' +
        esc(r.timestamp) + '</td><td>' + esc(r.api_endpoint) + '</td><td>' + r.status_code + '</td></tr>'
      ).join('');
      document.getElementById('page').textContent = (page + 1) + ' / ' + pages;
    }

    async function select(id) {
      selectedId = id;
      const res = await fetch(id === null ? '/detail' : '/detail?id=' + id);
      document.getElementById('detail').innerHTML = await res.text();
      drawTable();
    }

    document.getElementById('rows').addEventListener('click', e => {
      const tr = e.target.closest('tr');
      if (tr) select(Number(tr.dataset.id));
    });
    document.getElementById('prev').addEventListener('click', () => {
      if (page > 0) { page -= 1; drawTable(); }
    });
    document.getElementById('next').addEventListener('click', () => {
      if ((page + 1) * PAGE_SIZE < rows.length) { page += 1; drawTable(); }
    });
    for (const id of ['endpoint', 'status', 'start_date', 'end_date']) {
      document.getElementById(id).addEventListener('change', refresh);
    }
    window.addEventListener('load', refresh);
  </script>
</body>
</html>
"#;
  Ok(Html(
    template
      .replace("__TITLE__", PAGE_TITLE)
      .replace("__ENDPOINT_OPTIONS__", &endpoint_options)
      .replace("__START__", &start)
      .replace("__END__", &end),
  ))
}
