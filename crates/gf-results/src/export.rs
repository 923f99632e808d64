//! CSV export of run series for external plotting.

use crate::types::TimeseriesRecord;
use crate::ResultsResult;
use std::io::Write;

pub const CSV_HEADER: &str = "step,time_s,inflow_m3s,outflow_m3s,setpoint_m,level_m,gate_m,control";

pub fn write_csv<W: Write>(mut out: W, records: &[TimeseriesRecord]) -> ResultsResult<()> {
    writeln!(out, "{CSV_HEADER}")?;
    for r in records {
        let control = r.control.map(|u| u.to_string()).unwrap_or_default();
        writeln!(
            out,
            "{},{},{},{},{},{},{},{}",
            r.step,
            r.time_s,
            r.inflow_m3s,
            r.outflow_m3s,
            r.setpoint_m,
            r.level_m,
            r.gate_m,
            control
        )?;
    }
    Ok(())
}

pub fn series_to_csv(records: &[TimeseriesRecord]) -> ResultsResult<String> {
    let mut buf = Vec::new();
    write_csv(&mut buf, records)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}
