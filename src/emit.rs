//! Structured artifact assembly.
//!
//! Artifacts are built as ordered line lists rather than string
//! concatenation, so the emitters can be checked line-by-line in tests
//! independently of final formatting. `render` is the only place lines are
//! joined into text.

/// The shared copyright banner stamped on every generated file, matching the
/// license of the hand-written half of the addon.
const COPYRIGHT: &[&str] = &[
    "Copyright (c) 2013-2014, Cornell University",
    "All rights reserved.",
    "",
    "Redistribution and use in source and binary forms, with or without",
    "modification, are permitted provided that the following conditions are met:",
    "",
    "    * Redistributions of source code must retain the above copyright notice,",
    "      this list of conditions and the following disclaimer.",
    "    * Redistributions in binary form must reproduce the above copyright",
    "      notice, this list of conditions and the following disclaimer in the",
    "      documentation and/or other materials provided with the distribution.",
    "    * Neither the name of HyperDex nor the names of its contributors may be",
    "      used to endorse or promote products derived from this software without",
    "      specific prior written permission.",
    "",
    "THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS \"AS IS\"",
    "AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE",
    "IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR PURPOSE ARE",
    "DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT OWNER OR CONTRIBUTORS BE LIABLE",
    "FOR ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR CONSEQUENTIAL",
    "DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT OF SUBSTITUTE GOODS OR",
    "SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS INTERRUPTION) HOWEVER",
    "CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN CONTRACT, STRICT LIABILITY,",
    "OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE) ARISING IN ANY WAY OUT OF THE USE",
    "OF THIS SOFTWARE, EVEN IF ADVISED OF THE POSSIBILITY OF SUCH DAMAGE.",
];

/// An output file under construction: a provenance header followed by an
/// ordered list of lines.
#[derive(Debug, Clone, Default)]
pub struct Artifact {
    lines: Vec<String>,
}

impl Artifact {
    /// Start an artifact with the copyright banner and machine-generated
    /// notice, prefixed with the target language's comment leader
    /// (`//` for C++, `%` for LaTeX).
    pub fn with_header(comment_leader: &str) -> Artifact {
        let mut a = Artifact { lines: Vec::new() };
        for line in COPYRIGHT {
            if line.is_empty() {
                a.push(comment_leader.to_string());
            } else {
                a.push(format!("{} {}", comment_leader, line));
            }
        }
        a.blank();
        a.push(format!(
            "{} This file is generated by hyperglue. Do not edit.",
            comment_leader
        ));
        a.blank();
        a
    }

    pub fn push(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    pub fn blank(&mut self) {
        self.lines.push(String::new());
    }

    pub fn extend_lines(&mut self, lines: Vec<String>) {
        self.lines.extend(lines);
    }

    pub fn render(&self) -> String {
        let mut out = self.lines.join("\n");
        out.push('\n');
        out
    }
}
