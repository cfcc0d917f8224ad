//! Report emission: CSV data, a matplotlib plot script, and a standalone
//! Chart.js HTML page. Pure presentation over the collected benchmark rows.

use std::fs::File;
use std::io::{BufWriter, Write};

use crate::bench::BenchResult;

/// Write all rows as CSV.
pub fn export_csv(results: &[BenchResult], path: &str) -> std::io::Result<()> {
    let mut w = BufWriter::new(File::create(path)?);

    writeln!(
        w,
        "DRBG,NumBits,GenerationTimeUs,StateSize,OutputSize,Zeros,Ones,Ratio,Bias,BitsPerMicrosecond"
    )?;
    for r in results {
        writeln!(
            w,
            "{},{},{:.2},{},{},{},{},{:.6},{:.8},{:.2}",
            r.name,
            r.num_bits,
            r.generation_time_us,
            r.state_size,
            r.output_size,
            r.zeros,
            r.ones,
            r.ratio,
            r.bias,
            r.bits_per_us
        )?;
    }
    w.flush()
}

/// Write a matplotlib script that plots the CSV produced by `export_csv`.
pub fn write_plot_script(csv_path: &str, path: &str) -> std::io::Result<()> {
    let mut w = BufWriter::new(File::create(path)?);

    write!(
        w,
        r#"#!/usr/bin/env python3
"""Plot DRBG benchmark results from {csv}."""

import pandas as pd
import matplotlib.pyplot as plt

df = pd.read_csv('{csv}')
drbgs = df['DRBG'].unique()
colors = ['#2ecc71', '#3498db', '#e67e22']

fig, axes = plt.subplots(2, 2, figsize=(14, 10))
fig.suptitle('DRBG Performance Comparison', fontsize=16, fontweight='bold')

ax = axes[0, 0]
for i, drbg in enumerate(drbgs):
    data = df[df['DRBG'] == drbg]
    ax.plot(data['NumBits'], data['GenerationTimeUs'],
            marker='o', label=drbg, color=colors[i % len(colors)])
ax.set_xscale('log')
ax.set_yscale('log')
ax.set_xlabel('Sequence length (bits)')
ax.set_ylabel('Generation time (us)')
ax.set_title('Time complexity')
ax.legend()
ax.grid(True, alpha=0.3)

ax = axes[0, 1]
for i, drbg in enumerate(drbgs):
    data = df[df['DRBG'] == drbg]
    ax.plot(data['NumBits'], data['BitsPerMicrosecond'],
            marker='s', label=drbg, color=colors[i % len(colors)])
ax.set_xscale('log')
ax.set_xlabel('Sequence length (bits)')
ax.set_ylabel('Throughput (bits/us)')
ax.set_title('Generation throughput')
ax.legend()
ax.grid(True, alpha=0.3)

ax = axes[1, 0]
for i, drbg in enumerate(drbgs):
    data = df[df['DRBG'] == drbg]
    ax.plot(data['NumBits'], data['Bias'] * 100,
            marker='^', label=drbg, color=colors[i % len(colors)])
ax.set_xscale('log')
ax.set_xlabel('Sequence length (bits)')
ax.set_ylabel('Bias from 50% (%)')
ax.set_title('Bit distribution bias')
ax.legend()
ax.grid(True, alpha=0.3)
ax.axhline(y=0, color='gray', linestyle='--', alpha=0.5)

ax = axes[1, 1]
state_sizes = [df[df['DRBG'] == drbg]['StateSize'].iloc[0] for drbg in drbgs]
bars = ax.bar(drbgs, state_sizes, color=colors[:len(drbgs)])
ax.set_xlabel('DRBG mechanism')
ax.set_ylabel('State size (bytes)')
ax.set_title('Memory footprint')
for bar, size in zip(bars, state_sizes):
    ax.text(bar.get_x() + bar.get_width() / 2, bar.get_height() + 1,
            str(size), ha='center', va='bottom')

plt.tight_layout()
plt.savefig('drbg_comparison.png', dpi=150, bbox_inches='tight')
print('Plot saved as drbg_comparison.png')
"#,
        csv = csv_path
    )?;
    w.flush()
}

/// Write a standalone HTML page with Chart.js visualizations and the full
/// results table.
pub fn write_html(results: &[BenchResult], path: &str) -> std::io::Result<()> {
    let mut w = BufWriter::new(File::create(path)?);

    write!(
        w,
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<title>DRBG Benchmark Results</title>
<script src="https://cdn.jsdelivr.net/npm/chart.js"></script>
<style>
  body {{ font-family: sans-serif; background: #16213e; color: #eee; padding: 20px; }}
  .container {{ max-width: 1200px; margin: 0 auto; }}
  h1 {{ text-align: center; color: #00d2ff; }}
  .charts {{ display: grid; grid-template-columns: repeat(2, 1fr); gap: 20px; }}
  .chart {{ background: rgba(255,255,255,0.05); border-radius: 10px; padding: 15px; }}
  table {{ width: 100%; border-collapse: collapse; margin-top: 25px; }}
  th, td {{ padding: 8px 12px; text-align: center;
            border-bottom: 1px solid rgba(255,255,255,0.15); }}
  th {{ background: rgba(0,210,255,0.2); }}
</style>
</head>
<body>
<div class="container">
<h1>DRBG Benchmark Results</h1>
<div class="charts">
  <div class="chart"><canvas id="timeChart"></canvas></div>
  <div class="chart"><canvas id="throughputChart"></canvas></div>
  <div class="chart"><canvas id="biasChart"></canvas></div>
  <div class="chart"><canvas id="memoryChart"></canvas></div>
</div>
<table>
<thead><tr><th>DRBG</th><th>Bits</th><th>Time (us)</th><th>Zeros</th><th>Ones</th>
<th>Bias (%)</th><th>Throughput (bits/us)</th></tr></thead>
<tbody>
"#
    )?;

    for r in results {
        writeln!(
            w,
            "<tr><td>{}</td><td>{}</td><td>{:.2}</td><td>{}</td><td>{}</td><td>{:.4}</td><td>{:.2}</td></tr>",
            r.name,
            r.num_bits,
            r.generation_time_us,
            r.zeros,
            r.ones,
            r.bias * 100.0,
            r.bits_per_us
        )?;
    }

    write!(
        w,
        r#"</tbody>
</table>
</div>
<script>
const results = [
"#
    )?;

    for (i, r) in results.iter().enumerate() {
        let sep = if i + 1 < results.len() { "," } else { "" };
        writeln!(
            w,
            "  {{ name: '{}', bits: {}, time: {:.2}, stateSize: {}, bias: {:.8}, throughput: {:.2} }}{sep}",
            r.name, r.num_bits, r.generation_time_us, r.state_size, r.bias, r.bits_per_us
        )?;
    }

    write!(
        w,
        r#"];

const names = [...new Set(results.map(r => r.name))];
const bitSizes = [...new Set(results.map(r => r.bits))].sort((a, b) => a - b);
const colors = {{ 'CTR-DRBG': '#2ecc71', 'Hash-DRBG': '#3498db', 'HMAC-DRBG': '#e67e22' }};
const labels = bitSizes.map(b => b.toExponential(0));

function series(field) {{
  return names.map(name => ({{
    label: name,
    data: bitSizes.map(bits => {{
      const r = results.find(x => x.name === name && x.bits === bits);
      return r ? r[field] : null;
    }}),
    borderColor: colors[name],
    backgroundColor: colors[name] + '33',
    tension: 0.3
  }}));
}}

new Chart(document.getElementById('timeChart'), {{
  type: 'line',
  data: {{ labels, datasets: series('time') }},
  options: {{ responsive: true, plugins: {{ title: {{ display: true, text: 'Generation time (us, log scale)' }} }},
             scales: {{ y: {{ type: 'logarithmic' }} }} }}
}});

new Chart(document.getElementById('throughputChart'), {{
  type: 'line',
  data: {{ labels, datasets: series('throughput') }},
  options: {{ responsive: true, plugins: {{ title: {{ display: true, text: 'Throughput (bits/us)' }} }} }}
}});

new Chart(document.getElementById('biasChart'), {{
  type: 'line',
  data: {{ labels, datasets: series('bias') }},
  options: {{ responsive: true, plugins: {{ title: {{ display: true, text: 'Bias from 0.5' }} }} }}
}});

new Chart(document.getElementById('memoryChart'), {{
  type: 'bar',
  data: {{
    labels: names,
    datasets: [{{
      label: 'State size (bytes)',
      data: names.map(name => results.find(r => r.name === name).stateSize),
      backgroundColor: names.map(name => colors[name])
    }}]
  }},
  options: {{ responsive: true, plugins: {{ title: {{ display: true, text: 'Memory footprint' }} }} }}
}});
</script>
</body>
</html>
"#
    )?;
    w.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_results() -> Vec<BenchResult> {
        vec![
            BenchResult {
                name: "CTR-DRBG",
                num_bits: 1000,
                generation_time_us: 12.5,
                state_size: 56,
                output_size: 125,
                zeros: 498,
                ones: 502,
                ratio: 1.008,
                bias: 0.002,
                bits_per_us: 80.0,
            },
            BenchResult {
                name: "HMAC-DRBG",
                num_bits: 1000,
                generation_time_us: 30.0,
                state_size: 72,
                output_size: 125,
                zeros: 510,
                ones: 490,
                ratio: 0.96,
                bias: 0.01,
                bits_per_us: 33.3,
            },
        ]
    }

    #[test]
    fn test_export_csv() {
        let path = std::env::temp_dir().join("drbgmark_report_test.csv");
        let path = path.to_str().unwrap();

        export_csv(&sample_results(), path).unwrap();
        let content = std::fs::read_to_string(path).unwrap();
        let mut lines = content.lines();

        assert_eq!(
            lines.next().unwrap(),
            "DRBG,NumBits,GenerationTimeUs,StateSize,OutputSize,Zeros,Ones,Ratio,Bias,BitsPerMicrosecond"
        );
        assert!(lines.next().unwrap().starts_with("CTR-DRBG,1000,12.50,56,125,498,502,"));
        assert_eq!(lines.clone().count(), 1);

        std::fs::remove_file(path).unwrap();
    }

    #[test]
    fn test_write_html_contains_rows_and_data() {
        let path = std::env::temp_dir().join("drbgmark_report_test.html");
        let path = path.to_str().unwrap();

        write_html(&sample_results(), path).unwrap();
        let content = std::fs::read_to_string(path).unwrap();
        assert!(content.contains("<td>CTR-DRBG</td>"));
        assert!(content.contains("name: 'HMAC-DRBG'"));
        assert!(content.contains("stateSize: 72"));

        std::fs::remove_file(path).unwrap();
    }

    #[test]
    fn test_write_plot_script_references_csv() {
        let path = std::env::temp_dir().join("drbgmark_report_test.py");
        let path = path.to_str().unwrap();

        write_plot_script("results.csv", path).unwrap();
        let content = std::fs::read_to_string(path).unwrap();
        assert!(content.contains("pd.read_csv('results.csv')"));

        std::fs::remove_file(path).unwrap();
    }
}
