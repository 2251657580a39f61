/// Sentinel for a cache parameter the host could not report.
pub const UNKNOWN: i64 = -1;

/// L1 data-cache geometry of the host, as reported by the CPU.
///
/// Both fields are positive byte counts when known and [`UNKNOWN`] (-1)
/// otherwise, so a partial probe result is still representable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheTopology {
    pub l1d_bytes: i64,
    pub line_bytes: i64,
}

impl CacheTopology {
    /// Probe the host once. Intended to be called a single time per
    /// process; the result is plain data and can be copied around freely.
    pub fn detect() -> Self {
        CacheTopology {
            l1d_bytes: cache_size::l1_cache_size().map_or(UNKNOWN, |b| b as i64),
            line_bytes: cache_size::l1_cache_line_size().map_or(UNKNOWN, |b| b as i64),
        }
    }

    /// A topology with both parameters unknown.
    pub fn unknown() -> Self {
        CacheTopology {
            l1d_bytes: UNKNOWN,
            line_bytes: UNKNOWN,
        }
    }

    /// True when both the L1D size and the line size were reported.
    pub fn known(&self) -> bool {
        self.l1d_bytes > 0 && self.line_bytes > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_topology() {
        let t = CacheTopology::unknown();
        assert_eq!(t.l1d_bytes, UNKNOWN);
        assert_eq!(t.line_bytes, UNKNOWN);
        assert!(!t.known());
    }

    #[test]
    fn test_partial_topology_is_not_known() {
        let t = CacheTopology {
            l1d_bytes: 32768,
            line_bytes: UNKNOWN,
        };
        assert!(!t.known());
    }

    #[test]
    fn test_detect_is_known_or_sentinel() {
        // Host-dependent: either a positive byte count or the sentinel,
        // never zero or some other negative value.
        let t = CacheTopology::detect();
        assert!(t.l1d_bytes > 0 || t.l1d_bytes == UNKNOWN);
        assert!(t.line_bytes > 0 || t.line_bytes == UNKNOWN);
    }
}
