//! State Monad - stateful computation.
//!
//! The State monad represents computations that thread a state through
//! a sequence of operations without any mutation visible to the caller.
//!
//! # Overview
//!
//! A `State<S, A>` encapsulates a function `S -> (A, S)`, where `S` is the
//! state type and `A` is the result type. The function takes the current
//! state, produces a result, and returns the next state. Nothing runs until
//! [`State::run`] (or [`State::eval`] / [`State::exec`]) supplies the
//! initial state.
//!
//! A `State` is a one-shot description: running it consumes it.
//!
//! # Laws
//!
//! ## Monad Laws
//!
//! - Left Identity: `State::pure(a).flat_map(f) == f(a)`
//! - Right Identity: `m.flat_map(State::pure) == m`
//! - Associativity: `m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))`
//!
//! ## State Laws
//!
//! - Get Put Law: `get().flat_map(|s| put(s)) == pure(())`
//! - Put Get Law: `put(s).then(get())` returns `s`
//! - Put Put Law: `put(s1).then(put(s2)) == put(s2)`
//!
//! # Examples
//!
//! Counter pattern:
//!
//! ```rust
//! use monadic::effect::State;
//! use monadic::typeclass::Monad;
//!
//! fn increment() -> State<i32, ()> {
//!     State::modify(|count| count + 1)
//! }
//!
//! let computation = increment()
//!     .then(increment())
//!     .then(increment())
//!     .then(State::get());
//!
//! let (count, _) = computation.run(0);
//! assert_eq!(count, 3);
//! ```

use crate::typeclass::{Applicative, Functor, Monad, TypeConstructor};

/// A monad for computations that thread state through a sequence of operations.
///
/// # Type Parameters
///
/// - `S`: The state type
/// - `A`: The result type
///
/// # Examples
///
/// ```rust
/// use monadic::effect::State;
/// use monadic::typeclass::Monad;
///
/// let computation: State<i32, i32> = State::get()
///     .flat_map(|current| State::put(current + 1).then(State::pure(current)));
///
/// let (result, final_state) = computation.run(10);
/// assert_eq!(result, 10);
/// assert_eq!(final_state, 11);
/// ```
pub struct State<S, A> {
    /// The wrapped state transition function.
    run_function: Box<dyn FnOnce(S) -> (A, S)>,
}

impl<S, A> State<S, A>
where
    S: 'static,
    A: 'static,
{
    /// Creates a new State from a state transition function.
    ///
    /// # Arguments
    ///
    /// * `function` - A function that takes the current state and returns
    ///   a tuple of (result, `new_state`)
    pub fn new<F>(function: F) -> Self
    where
        F: FnOnce(S) -> (A, S) + 'static,
    {
        Self {
            run_function: Box::new(function),
        }
    }

    /// Runs the State computation with the given initial state.
    ///
    /// Returns both the result and the final state.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::effect::State;
    ///
    /// let state: State<i32, i32> = State::new(|s: i32| (s + 1, s * 2));
    /// assert_eq!(state.run(10), (11, 20));
    /// ```
    pub fn run(self, initial_state: S) -> (A, S) {
        (self.run_function)(initial_state)
    }

    /// Runs the State computation and returns only the result.
    pub fn eval(self, initial_state: S) -> A {
        let (result, _) = self.run(initial_state);
        result
    }

    /// Runs the State computation and returns only the final state.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::effect::State;
    ///
    /// let state: State<i32, i32> = State::new(|s: i32| (s * 2, s + 1));
    /// assert_eq!(state.exec(10), 11);
    /// ```
    pub fn exec(self, initial_state: S) -> S {
        let (_, final_state) = self.run(initial_state);
        final_state
    }

    /// Creates a State that returns a constant value without modifying the state.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::effect::State;
    ///
    /// let state: State<i32, &str> = State::pure("constant");
    /// assert_eq!(state.run(42), ("constant", 42));
    /// ```
    pub fn pure(value: A) -> Self {
        Self::new(move |state| (value, state))
    }

    /// Creates a State that projects a value from the current state.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::effect::State;
    ///
    /// struct Config { port: u16 }
    ///
    /// let state: State<Config, u16> = State::gets(|c: &Config| c.port);
    /// assert_eq!(state.eval(Config { port: 8080 }), 8080);
    /// ```
    pub fn gets<F>(projection: F) -> Self
    where
        F: FnOnce(&S) -> A + 'static,
    {
        Self::new(move |state| {
            let result = projection(&state);
            (result, state)
        })
    }

    /// Threads the state through each computation in order, collecting results.
    ///
    /// Running the result from `s0` is the same as running the first step
    /// from `s0`, the second from the state it left behind, and so on. There
    /// is no failure channel: every step runs. See
    /// [`State::try_sequence`] for steps that can fail.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::effect::State;
    ///
    /// let tick = || State::new(|n: u32| (n * 10, n + 1));
    /// let all = State::sequence(vec![tick(), tick(), tick()]);
    /// assert_eq!(all.run(1), (vec![10, 20, 30], 4));
    /// ```
    pub fn sequence<I>(computations: I) -> State<S, Vec<A>>
    where
        I: IntoIterator<Item = Self>,
    {
        let steps: Vec<Self> = computations.into_iter().collect();
        State::new(move |initial_state| {
            let mut results = Vec::with_capacity(steps.len());
            let mut state = initial_state;
            for step in steps {
                let (result, next_state) = step.run(state);
                results.push(result);
                state = next_state;
            }
            (results, state)
        })
    }

    /// Builds one computation per item with `function`, then sequences them.
    pub fn traverse<T, I, F>(items: I, function: F) -> State<S, Vec<A>>
    where
        I: IntoIterator<Item = T>,
        F: FnMut(T) -> Self,
    {
        Self::sequence(items.into_iter().map(function))
    }
}

impl<S, A, E> State<S, Result<A, E>>
where
    S: 'static,
    A: 'static,
    E: 'static,
{
    /// Like [`State::sequence`], but stops at the first step whose result is `Err`.
    ///
    /// The returned state is the one left by the failing step; the steps
    /// after it are never run.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::effect::State;
    ///
    /// let withdraw = |amount: u32| {
    ///     State::new(move |balance: u32| match balance.checked_sub(amount) {
    ///         Some(rest) => (Ok(amount), rest),
    ///         None => (Err(format!("cannot withdraw {amount}")), balance),
    ///     })
    /// };
    ///
    /// let plan = State::try_sequence(vec![withdraw(30), withdraw(90), withdraw(10)]);
    /// assert_eq!(plan.run(100), (Err("cannot withdraw 90".to_string()), 70));
    /// ```
    pub fn try_sequence<I>(computations: I) -> State<S, Result<Vec<A>, E>>
    where
        I: IntoIterator<Item = Self>,
    {
        let steps: Vec<Self> = computations.into_iter().collect();
        State::new(move |initial_state| {
            let mut results = Vec::with_capacity(steps.len());
            let mut state = initial_state;
            for step in steps {
                match step.run(state) {
                    (Ok(result), next_state) => {
                        results.push(result);
                        state = next_state;
                    }
                    (Err(error), next_state) => return (Err(error), next_state),
                }
            }
            (Ok(results), state)
        })
    }
}

// =============================================================================
// MonadState Operations
// =============================================================================

impl<S> State<S, S>
where
    S: Clone + 'static,
{
    /// Creates a State that returns the current state without modifying it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::effect::State;
    ///
    /// let state: State<i32, i32> = State::get();
    /// assert_eq!(state.run(42), (42, 42));
    /// ```
    #[must_use]
    pub fn get() -> Self {
        Self::new(|state: S| (state.clone(), state))
    }
}

impl<S> State<S, ()>
where
    S: 'static,
{
    /// Creates a State that replaces the current state with a new value.
    pub fn put(new_state: S) -> Self {
        Self::new(move |_| ((), new_state))
    }

    /// Creates a State that modifies the current state using a function.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::effect::State;
    ///
    /// let state: State<i32, ()> = State::modify(|x| x * 2);
    /// assert_eq!(state.exec(21), 42);
    /// ```
    pub fn modify<F>(modifier: F) -> Self
    where
        F: FnOnce(S) -> S + 'static,
    {
        Self::new(move |state| ((), modifier(state)))
    }
}

// =============================================================================
// Type Class Implementations
// =============================================================================

impl<S, A> TypeConstructor for State<S, A> {
    type Inner = A;
    type WithType<B> = State<S, B>;
}

impl<S, A> Functor for State<S, A>
where
    S: 'static,
    A: 'static,
{
    fn fmap<B, F>(self, function: F) -> State<S, B>
    where
        F: FnOnce(A) -> B + 'static,
        B: 'static,
    {
        let original_function = self.run_function;
        State::new(move |state| {
            let (result, new_state) = original_function(state);
            (function(result), new_state)
        })
    }
}

impl<S, A> Applicative for State<S, A>
where
    S: 'static,
    A: 'static,
{
    fn pure<B>(value: B) -> State<S, B>
    where
        B: 'static,
    {
        State::pure(value)
    }

    /// Runs `self` first, then `other` from the state `self` left behind.
    fn map2<B, C, F>(self, other: State<S, B>, function: F) -> State<S, C>
    where
        F: FnOnce(A, B) -> C + 'static,
        B: 'static,
        C: 'static,
    {
        let self_function = self.run_function;
        State::new(move |state| {
            let (result_a, intermediate_state) = self_function(state);
            let (result_b, final_state) = other.run(intermediate_state);
            (function(result_a, result_b), final_state)
        })
    }
}

impl<S, A> Monad for State<S, A>
where
    S: 'static,
    A: 'static,
{
    fn flat_map<B, F>(self, function: F) -> State<S, B>
    where
        F: FnOnce(A) -> State<S, B> + 'static,
        B: 'static,
    {
        let original_function = self.run_function;
        State::new(move |state| {
            let (result, intermediate_state) = original_function(state);
            function(result).run(intermediate_state)
        })
    }
}

impl<S, A> std::fmt::Display for State<S, A> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "<State>")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_display_state() {
        let state: State<i32, i32> = State::new(|s: i32| (s * 2, s + 1));
        assert_eq!(format!("{state}"), "<State>");
    }

    #[rstest]
    fn state_new_and_run() {
        let state: State<i32, i32> = State::new(|s: i32| (s * 2, s + 1));
        let (result, final_state) = state.run(10);
        assert_eq!(result, 20);
        assert_eq!(final_state, 11);
    }

    #[rstest]
    fn state_put_replaces_state() {
        let state: State<i32, ()> = State::put(100);
        let ((), final_state) = state.run(42);
        assert_eq!(final_state, 100);
    }

    #[rstest]
    fn state_fmap_transforms_result() {
        let mapped = State::new(|s: i32| (s, s)).fmap(|value| value * 2);
        assert_eq!(mapped.run(21), (42, 21));
    }

    #[rstest]
    fn state_flat_map_chains_states() {
        let state: State<i32, i32> = State::new(|s: i32| (s, s + 1));
        let chained = state.flat_map(|value| State::new(move |s: i32| (value + s, s)));
        let (result, final_state) = chained.run(10);
        assert_eq!(result, 21); // 10 + 11
        assert_eq!(final_state, 11);
    }

    #[rstest]
    fn state_map2_combines_states() {
        let state1: State<i32, i32> = State::new(|s: i32| (s, s + 1));
        let state2: State<i32, i32> = State::new(|s: i32| (s * 2, s + 1));
        let combined = state1.map2(state2, |a, b| a + b);
        assert_eq!(combined.run(10), (32, 12));
    }

    #[rstest]
    fn state_holds_non_clone_state() {
        struct Counter(u32);

        let bump: State<Counter, ()> = State::modify(|Counter(n)| Counter(n + 1));
        let Counter(total) = bump.exec(Counter(4));
        assert_eq!(total, 5);
    }

    #[rstest]
    fn sequence_empty_keeps_state() {
        let empty: State<i32, Vec<i32>> = State::sequence(Vec::new());
        assert_eq!(empty.run(7), (Vec::new(), 7));
    }

    #[rstest]
    fn try_sequence_all_ok_collects_results() {
        let step = |n: i32| State::new(move |s: i32| (Ok::<i32, String>(n + s), s + 1));
        let plan = State::try_sequence(vec![step(1), step(2)]);
        assert_eq!(plan.run(0), (Ok(vec![1, 3]), 2));
    }

    #[rstest]
    fn try_sequence_skips_steps_after_error() {
        let failing: State<i32, Result<i32, &str>> = State::new(|s: i32| (Err("stop"), s + 100));
        let never: State<i32, Result<i32, &str>> =
            State::new(|_| panic!("steps after an error must not run"));
        let plan = State::try_sequence(vec![State::pure(Ok(1)), failing, never]);
        assert_eq!(plan.run(0), (Err("stop"), 100));
    }
}
