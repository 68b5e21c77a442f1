//! Root-finding algorithm definitions.  
//!
//! Provides the [`Algorithm`] enum, which enumerates both supported methods, 
//! along with the shared [`GLOBAL_MAX_ITER_FALLBACK`] hard cap.  


/// Cap applied when an algorithm has no heuristic default 
/// and the config leaves `max_iter` unset.  
pub const GLOBAL_MAX_ITER_FALLBACK: usize = 500; 


/// Root-finding algorithm variants. 
/// - [`Algorithm::Secant`]         : two-point secant update 
/// - [`Algorithm::ModifiedSecant`] : one point plus a relative perturbation 
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Algorithm { 
    Secant, 
    ModifiedSecant,
}

impl Algorithm { 
    /// Default iteration count if `max_iter` is unset in config. 
    ///  
    /// # Notes 
    /// - Applied only when `max_iter` is unset.  
    /// - Values are heuristic and method-specific.  
    pub const fn default_max_iter(self) -> Option<usize> { 
        match self { 
            Algorithm::Secant         => Some(50), 
            Algorithm::ModifiedSecant => Some(50), 
        }
    }

    pub const fn algorithm_name(self) -> &'static str { 
        match self { 
            Algorithm::Secant         => "secant", 
            Algorithm::ModifiedSecant => "modified_secant", 
        }
    }

    /// Heading used by the trace output (e.g. `"Standard Secant Method"`). 
    pub const fn title(self) -> &'static str { 
        match self { 
            Algorithm::Secant         => "Standard Secant Method", 
            Algorithm::ModifiedSecant => "Modified Secant Method", 
        }
    }

    /// Short name used in the non-convergence diagnostic. 
    pub const fn short_title(self) -> &'static str { 
        match self { 
            Algorithm::Secant         => "Secant", 
            Algorithm::ModifiedSecant => "Modified Secant", 
        }
    }

    /// Resolves the effective iteration cap from an optional config value. 
    pub(crate) fn resolve_max_iter(self, max_iter: Option<usize>) -> usize { 
        match max_iter { 
            Some(v) => v, 
            None    => self.default_max_iter().unwrap_or(GLOBAL_MAX_ITER_FALLBACK),
        }
    }
}
impl std::fmt::Display for Algorithm { 
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result { 
        write!(f, "{}", self.algorithm_name())
    }
}
