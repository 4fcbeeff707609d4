use super::mark::Mark;
///
/// Draft mark readings of one observation,
/// port and starboard at the forward, midship and aft positions.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Marks {
    pub fwd_port: Mark,
    pub fwd_starboard: Mark,
    pub mid_port: Mark,
    pub mid_starboard: Mark,
    pub aft_port: Mark,
    pub aft_starboard: Mark,
}
