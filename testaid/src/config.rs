//! Configuration types for controlling generation parameters.

/// Configuration validation errors
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Default string length must be > 0
    InvalidStringLength(usize),
    /// Minimum sequence length must be > 0
    InvalidMinSequenceLength(usize),
    /// Sequence length bounds must satisfy min < max
    InvalidSequenceRange { min: usize, max: usize },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::InvalidStringLength(n) => {
                write!(f, "Invalid default string length: {} (must be > 0)", n)
            }
            ConfigError::InvalidMinSequenceLength(n) => {
                write!(f, "Invalid minimum sequence length: {} (must be > 0)", n)
            }
            ConfigError::InvalidSequenceRange { min, max } => {
                write!(
                    f,
                    "Invalid sequence length range: {}..{} (min must be less than max)",
                    min, max
                )
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Tunables shared by the generators
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationConfig {
    /// Length of strings produced when the caller does not ask for one
    pub default_string_length: usize,
    /// Inclusive lower bound for the length of an unsized random sequence
    pub min_sequence_length: usize,
    /// Exclusive upper bound for the length of an unsized random sequence
    pub max_sequence_length: usize,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            default_string_length: 8,
            min_sequence_length: 8,
            max_sequence_length: 300,
        }
    }
}

impl GenerationConfig {
    /// Create a new generation configuration with validation
    pub fn new(
        default_string_length: usize,
        min_sequence_length: usize,
        max_sequence_length: usize,
    ) -> Result<Self, ConfigError> {
        let config = Self {
            default_string_length,
            min_sequence_length,
            max_sequence_length,
        };
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.default_string_length == 0 {
            return Err(ConfigError::InvalidStringLength(self.default_string_length));
        }
        if self.min_sequence_length == 0 {
            return Err(ConfigError::InvalidMinSequenceLength(
                self.min_sequence_length,
            ));
        }
        if self.min_sequence_length >= self.max_sequence_length {
            return Err(ConfigError::InvalidSequenceRange {
                min: self.min_sequence_length,
                max: self.max_sequence_length,
            });
        }
        Ok(())
    }

    /// Set the default string length
    pub fn with_string_length(mut self, length: usize) -> Result<Self, ConfigError> {
        self.default_string_length = length;
        self.validate()?;
        Ok(self)
    }

    /// Set the bounds used when a sequence length is not given
    pub fn with_sequence_lengths(mut self, min: usize, max: usize) -> Result<Self, ConfigError> {
        self.min_sequence_length = min;
        self.max_sequence_length = max;
        self.validate()?;
        Ok(self)
    }
}
