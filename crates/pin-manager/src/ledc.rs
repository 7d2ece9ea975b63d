/// Largest LEDC pool on any supported chip.
pub const MAX_LEDC_CHANNELS: u8 = 16;

/// Fixed pool of PWM (LEDC) generator channels.
///
/// Channels are handed out in contiguous runs because a multi-channel LED
/// bus programs its generators as one block. First fit, left to right.
/// There is no ownership tagging at this layer; callers track their runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LedcPool {
    bits: u16,
    capacity: u8,
}

impl LedcPool {
    /// An all-free pool. Capacities above [`MAX_LEDC_CHANNELS`] are clamped.
    pub const fn new(capacity: u8) -> Self {
        let capacity = if capacity > MAX_LEDC_CHANNELS {
            MAX_LEDC_CHANNELS
        } else {
            capacity
        };
        Self { bits: 0, capacity }
    }

    pub const fn capacity(&self) -> u8 {
        self.capacity
    }

    /// Whether `channel` is currently unoccupied. Out-of-range channels
    /// report as occupied.
    pub const fn is_free(&self, channel: u8) -> bool {
        channel < self.capacity && self.bits & (1 << channel) == 0
    }

    /// Finds and occupies a contiguous run of `count` free channels,
    /// returning the run's first index. On failure nothing is modified.
    pub fn allocate(&mut self, count: u8) -> Option<u8> {
        if count == 0 || count > self.capacity {
            return None;
        }
        let mut run = 0u8;
        for channel in 0..self.capacity {
            if self.bits & (1 << channel) != 0 {
                run = 0;
                continue;
            }
            run += 1;
            if run == count {
                let start = channel + 1 - count;
                for taken in start..=channel {
                    self.bits |= 1 << taken;
                }
                return Some(start);
            }
        }
        None
    }

    /// Frees `[start, start + count)`, stopping at the pool capacity so a
    /// run ending exactly at the last channel never walks past the end.
    pub fn release(&mut self, start: u8, count: u8) {
        for channel in start..start.saturating_add(count) {
            if channel >= self.capacity {
                return;
            }
            self.bits &= !(1 << channel);
        }
    }
}
