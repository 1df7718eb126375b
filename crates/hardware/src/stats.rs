//! Simulation statistics collection and reporting.
//!
//! This module tracks performance metrics for the Y86-64 pipeline. It provides:
//! 1. **Cycle and CPI:** Total cycles, retired instructions, and derived metrics (CPI, IPC).
//! 2. **Stalls:** Load-use and return stall cycles.
//! 3. **Control hazards:** Branch mispredictions.
//! 4. **Bubbles:** Bubbles injected into the E and M registers.

use std::time::Instant;

/// Simulation statistics structure tracking all performance metrics.
#[derive(Clone, Debug)]
pub struct SimStats {
    start_time: Instant,
    /// Total simulator cycles elapsed.
    pub cycles: u64,
    /// Number of non-`nop` instructions that completed Writeback with `AOK` status.
    pub instructions_retired: u64,

    /// Cycles Fetch and Decode were held by a load-use hazard.
    pub stalls_data: u64,
    /// Cycles Fetch was held waiting for a `ret` to resolve.
    pub stalls_control: u64,

    /// Conditional jumps that were predicted taken but fell through.
    pub branch_mispredictions: u64,

    /// Bubbles injected into E (load-use and misprediction).
    pub bubbles_execute: u64,
    /// Bubbles injected into M (fault draining).
    pub bubbles_memory: u64,
}

impl Default for SimStats {
    /// Returns the default value.
    fn default() -> Self {
        Self {
            start_time: Instant::now(),
            cycles: 0,
            instructions_retired: 0,
            stalls_data: 0,
            stalls_control: 0,
            branch_mispredictions: 0,
            bubbles_execute: 0,
            bubbles_memory: 0,
        }
    }
}

/// Section names for selective stats output.
///
/// Valid section identifiers: `"summary"`, `"hazards"`.
/// Pass an empty slice to `print_sections` to print all sections.
pub const STATS_SECTIONS: &[&str] = &["summary", "hazards"];

impl SimStats {
    /// Cycles per retired instruction, or `0.0` before anything retires.
    pub fn cpi(&self) -> f64 {
        if self.instructions_retired == 0 {
            0.0
        } else {
            self.cycles as f64 / self.instructions_retired as f64
        }
    }

    /// Prints only the requested statistics sections to stdout.
    ///
    /// # Arguments
    ///
    /// * `sections` - Slice of section names to print, or empty for all.
    pub fn print_sections(&self, sections: &[String]) {
        let want = |s: &str| sections.is_empty() || sections.iter().any(|x| x == s);
        let seconds = self.start_time.elapsed().as_secs_f64();
        let cyc = self.cycles.max(1) as f64;

        if want("summary") {
            let ipc = self.instructions_retired as f64 / cyc;
            println!("\n==========================================================");
            println!("Y86-64 PIPELINE SIMULATION STATISTICS");
            println!("==========================================================");
            println!("host_seconds             {seconds:.4} s");
            println!("sim_cycles               {}", self.cycles);
            println!("sim_insts                {}", self.instructions_retired);
            println!("sim_ipc                  {ipc:.4}");
            println!("sim_cpi                  {:.4}", self.cpi());
            println!("----------------------------------------------------------");
        }
        if want("hazards") {
            let pct = |n: u64| (n as f64 / cyc) * 100.0;
            println!("HAZARDS");
            println!(
                "  stalls.load_use        {} ({:.2}%)",
                self.stalls_data,
                pct(self.stalls_data)
            );
            println!(
                "  stalls.ret             {} ({:.2}%)",
                self.stalls_control,
                pct(self.stalls_control)
            );
            println!("  bp.mispredicts         {}", self.branch_mispredictions);
            println!("  bubbles.execute        {}", self.bubbles_execute);
            println!("  bubbles.memory         {}", self.bubbles_memory);
        }
        println!("==========================================================");
    }

    /// Prints all statistics sections to stdout.
    ///
    /// Equivalent to `print_sections(&[])`.
    pub fn print(&self) {
        self.print_sections(&[]);
    }
}
