#![no_std]
use soroban_sdk::{
    contract, contracterror, contractimpl, contracttype, panic_with_error, symbol_short, Env,
    String,
};

/// Office Hours example contract demonstrating range-based classification
/// and structured error handling in Soroban.
///
/// The contract takes a clock time encoded as an HHMM integer (hours x 100
/// plus minutes, e.g. `1430` for 2:30 PM) and maps it into one of five
/// mutually exclusive outcomes. Three outcomes are working-hours greetings
/// (`Morning`, `Afternoon`, `Evening`); two are rejections (`AtLunch`,
/// `AfterHours`), the latter carrying the offending time back to the caller.
///
/// # Purpose
///
/// The Office Hours contract is designed to:
/// - Demonstrate non-overlapping range matching with a deliberate precedence
///   (the lunch band is carved out of the working day before the greeting
///   bands are considered)
/// - Show the two Soroban error styles side by side: an unconditional
///   `panic_with_error!` abort for contract violations, and typed
///   `Result`-based rejection for expected failure cases
/// - Illustrate a `#[contracttype]` enum with a data-carrying variant
///
/// # Contract Functions
///
/// - `classify(time)` - Returns the full `Classification` outcome
/// - `greeting(time)` - Returns a greeting string, or an error code for the
///   lunch and after-hours bands
///
/// # Input Encoding
///
/// Times are HHMM integers in the conceptual range [0, 2359]. Only the
/// coarse bound is enforced: any value of 2400 or above aborts with
/// `Error::ClockOutOfRange`. The minutes sub-field is not validated, so
/// values such as 1275 pass the bound check and classify by range as if the
/// minutes were valid.
#[contract]
pub struct OfficeHours;

/// Error codes for the Office Hours contract.
///
/// `ClockOutOfRange` is a contract violation: callers must never pass a time
/// of 2400 or above, and doing so aborts the invocation rather than
/// returning a typed error. `AfterHours` and `AtLunch` are expected
/// rejections surfaced by `greeting`.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    /// Time is 2400 or above, outside the HHMM clock domain
    ClockOutOfRange = 1,
    /// Time falls outside working hours (after 22:00 or before 08:00)
    AfterHours = 2,
    /// Time falls inside the lunch break (12:00 to 12:59)
    AtLunch = 3,
}

/// Outcome of classifying an HHMM clock time.
///
/// The five variants are exhaustive over the bound-checked domain
/// [0, 2399]. `AfterHours` carries the offending time so callers can report
/// exactly what was rejected.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Classification {
    Morning,
    Afternoon,
    Evening,
    AtLunch,
    AfterHours(u32),
}

#[contractimpl]
impl OfficeHours {
    /// Classify an HHMM clock time into one of the five outcomes.
    ///
    /// Evaluation is first match wins:
    /// 1. After 22:00 or before 08:00 is `AfterHours(time)`
    /// 2. 1200 to 1299 is `AtLunch`
    /// 3. 800 to 1159 is `Morning`
    /// 4. 1300 to 1799 is `Afternoon`
    /// 5. 1800 to 2200 is `Evening`
    ///
    /// Aborts with `Error::ClockOutOfRange` if `time >= 2400`. Emits a
    /// `classify` event carrying the input and the outcome.
    ///
    /// # Example Usage
    ///
    /// ```rust
    /// # use soroban_sdk::Env;
    /// # use office_hours::{Classification, OfficeHours, OfficeHoursClient};
    /// # let env = Env::default();
    /// # let contract_id = env.register(OfficeHours, ());
    /// # let client = OfficeHoursClient::new(&env, &contract_id);
    /// assert_eq!(client.classify(&930), Classification::Morning);
    /// assert_eq!(client.classify(&2330), Classification::AfterHours(2330));
    /// ```
    pub fn classify(env: Env, time: u32) -> Classification {
        if time >= 2400 {
            panic_with_error!(&env, Error::ClockOutOfRange);
        }
        let outcome = Self::band(time);
        env.events()
            .publish((symbol_short!("classify"),), (time, outcome.clone()));
        outcome
    }

    /// Return a greeting for the given HHMM clock time.
    ///
    /// Maps the three working-hours bands to "Good morning",
    /// "Good afternoon" and "Good evening". The lunch and after-hours bands
    /// are rejected with `Error::AtLunch` and `Error::AfterHours`. Same
    /// coarse-bound abort as `classify` for times of 2400 or above.
    pub fn greeting(env: Env, time: u32) -> Result<String, Error> {
        if time >= 2400 {
            panic_with_error!(&env, Error::ClockOutOfRange);
        }
        match Self::band(time) {
            Classification::Morning => Ok(String::from_str(&env, "Good morning")),
            Classification::Afternoon => Ok(String::from_str(&env, "Good afternoon")),
            Classification::Evening => Ok(String::from_str(&env, "Good evening")),
            Classification::AtLunch => Err(Error::AtLunch),
            Classification::AfterHours(_) => Err(Error::AfterHours),
        }
    }
}

impl OfficeHours {
    // Assumes time < 2400. The after-hours and lunch checks run before the
    // greeting bands, so the remaining ranges cover [800, 2200] exactly.
    fn band(time: u32) -> Classification {
        if time > 2200 || time < 800 {
            Classification::AfterHours(time)
        } else if (1200..=1299).contains(&time) {
            Classification::AtLunch
        } else if (800..=1159).contains(&time) {
            Classification::Morning
        } else if (1300..=1799).contains(&time) {
            Classification::Afternoon
        } else {
            // 1800..=2200
            Classification::Evening
        }
    }
}
