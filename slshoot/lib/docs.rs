//! Theoretical background.
//!
//! # Contents
//! - [Background](#background)
//! - [Integration](#integration)
//! - [Eigenvalue search](#eigenvalue-search)
//! - [The angular operator](#the-angular-operator)
//! - [Normalization](#normalization)
//!
//! # Background
//! A Sturm-Liouville-type eigenvalue problem asks for the values of *λ* for
//! which the linear second-order equation
//! ```text
//!        d²u        du
//! p(x) ----- + q(x) -- + (r(x) - λ) u(x) = 0
//!        dx²        dx
//! ```
//! has a non-trivial solution satisfying the Dirichlet conditions *u*(*a*) =
//! *u*(*b*) = 0. Such values form a discrete set (the eigenvalues), each with
//! an associated eigenfunction that is unique up to a multiplicative constant.
//!
//! The shooting method[^1] turns this boundary value problem into a sequence of
//! initial value problems: fix *u*(*a*) = 0 and *u*'(*a*) = *s* for some
//! arbitrary *s* ≠ 0, integrate across the domain for a trial *λ*, and look at
//! the value of the solution at the far end. Since the equation is linear and
//! homogeneous, the choice of *s* only scales the solution, so the far-end
//! value
//! ```text
//! D(λ) = u(b; λ)
//! ```
//! is, up to scale, a function of *λ* alone, and the eigenvalues are exactly
//! its zeros.
//!
//! # Integration
//! The second-order equation is rewritten as a first-order system for the pair
//! *y* = (*u*, *u*')
//! ```text
//! dy   [                 u'                ]
//! -- = [                                   ]
//! dx   [ (-q(x) u' - (r(x) - λ) u) / p(x)  ]
//! ```
//! and advanced with the classical fourth-order Runge-Kutta scheme under
//! adaptive step-size control. Each trial step of size *h* is taken both as a
//! single step and as two steps of size *h*/2; the difference between the two
//! results estimates the local truncation error. The step is accepted when the
//! worst component of
//! ```text
//!                 |y_half - y_full|
//! er = --------------------------------------
//!      atol + rtol max(|y_half|, |y_full|)
//! ```
//! is less than 1, and the next step size is estimated as
//! ```text
//! h' = 0.9 h er^(-1/5)
//! ```
//! clamped to [*h*/4, 4 *h*]. Steps are clipped so that every point of the
//! output grid is landed on exactly, which means that the grid only determines
//! where the solution is reported and not how accurately it is computed.
//!
//! # Eigenvalue search
//! Given a guess *λ*₀, the search brackets [*λ*₀ - *w*, *λ*₀ + *w*] and bisects
//! it, evaluating *D* at each midpoint until |*D*| falls below a tolerance.
//! The default rule keeps the lower half of the bracket whenever *D* > 0 and
//! the upper half otherwise. This converges whenever *D* increases through
//! zero somewhere inside the bracket, but it never checks for a sign change
//! and so can also wander to an end of the bracket and run out of iterations.
//! The alternative rule evaluates *D* at both ends first, requires opposite
//! signs, and keeps whichever half still has them.
//!
//! Successive eigenvalues are found by restarting the search a fixed offset
//! past the last one found. Because a falling zero of *D* is invisible to the
//! default rule, two consecutive searches may converge on the same eigenvalue;
//! this is reported but not corrected.
//!
//! A scan instead evaluates *D* over a grid of *λ* values, locates every sign
//! change by inverse Lagrange interpolation over the surrounding four samples,
//! and refines each estimate by bisection between the two grid values around
//! it. This finds zeros of either direction, at the cost of one integration
//! per grid value.
//!
//! # The angular operator
//! The default problem is posed on (0, π/2) with
//! ```text
//!         cos⁴ x
//! p(x) = - ------
//!            2
//!
//!         cos³ x cos 2x
//! q(x) = - -------------
//!            2 sin x
//!
//!        m² cos² x   cos x
//! r(x) = --------- - -----
//!        2 sin² x    sin x
//! ```
//! with *m* = 1. Both ends are singular. Near *x* = 0 the coefficients *q*
//! and *r* diverge, which is handled by starting the domain a small distance
//! inside and by bounding |sin *x*| from below where it appears in a
//! denominator. Near *x* = π/2, *p* vanishes to fourth order and the point is
//! irregular: writing *t* = π/2 - *x*, the solutions behave like
//! ```text
//!           ⎛  √(2λ) ⎞
//! u ~ t exp ⎜± i ----- ⎟
//!           ⎝    t   ⎠
//! ```
//! for *λ* > 0, so *u* oscillates ever faster approaching the right end and
//! *D*(*λ*) oscillates rapidly in *λ*. For *λ* < 0 the same analysis gives one
//! exponentially growing solution, and the integration overflows well before
//! reaching the end of the domain.
//!
//! # Normalization
//! Eigenfunctions are reported normalized so that
//! ```text
//! b
//! ∫ u(x)² dx = 1
//! a
//! ```
//! where the integral is computed with the trapezoidal rule over the output
//! grid.
//!
//! # References
//! [^1]: W. H. Press, S. A. Teukolsky, W. T. Vetterling, and B. P. Flannery,
//! *Numerical Recipes: The Art of Scientific Computing*, 3rd ed., §18.1
//! (Cambridge University Press, 2007).
