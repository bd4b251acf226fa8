//! Parameter set - tunable extraction knobs carried between attempts

/// Default rendering resolution, in dots per inch
pub const DEFAULT_RENDER_DPI: u32 = 300;

/// Tunable parameters threaded into synthesis
///
/// A parameter set is an immutable value. Analysis produces a new set rather
/// than editing the one used for the previous attempt.
///
/// # Examples
///
/// ```
/// use parsewright_domain::ParameterSet;
///
/// let params = ParameterSet::default();
/// assert_eq!(params.render_dpi(), 300);
///
/// let sharper = params.with_render_dpi(350);
/// assert_eq!(params.render_dpi(), 300);
/// assert_eq!(sharper.render_dpi(), 350);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ParameterSet {
    render_dpi: u32,
}

impl ParameterSet {
    /// Create a parameter set with an explicit rendering resolution
    pub fn new(render_dpi: u32) -> Self {
        Self { render_dpi }
    }

    /// Rendering resolution used by rendering-based strategies
    pub fn render_dpi(&self) -> u32 {
        self.render_dpi
    }

    /// Copy of this set with a different rendering resolution
    pub fn with_render_dpi(&self, render_dpi: u32) -> Self {
        Self { render_dpi }
    }
}

impl Default for ParameterSet {
    fn default() -> Self {
        Self::new(DEFAULT_RENDER_DPI)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_render_dpi_leaves_original_untouched() {
        let params = ParameterSet::default();
        let raised = params.with_render_dpi(350);
        assert_eq!(params.render_dpi(), DEFAULT_RENDER_DPI);
        assert_eq!(raised.render_dpi(), 350);
    }
}
