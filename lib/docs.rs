//! Theoretical background.
//!
//! # Contents
//! - [Background](#background)
//! - [Finite differences](#finite-differences)
//! - [Quadrature](#quadrature)
//! - [Density](#density)
//! - [Exchange](#exchange)
//! - [Coulomb interaction](#coulomb-interaction)
//!
//! # Background
//! In the Kohn-Sham formulation of density-functional theory[^1], a system of
//! interacting electrons is replaced by a system of non-interacting electrons
//! moving in an effective potential that depends on the electron density
//! itself. In one dimension and atomic units, each orbital satisfies
//! ```text
//!    1 ∂²
//! - --- --- ψ_n(x) + V_eff[ρ](x) ψ_n(x) = ε_n ψ_n(x)
//!    2 ∂x²
//!
//! V_eff[ρ](x) = V_ext(x) + V_H[ρ](x) + V_x[ρ](x)
//! ```
//! with the density built from the lowest occupied orbitals,
//! ```text
//! ρ(x) = Σ_n f_n |ψ_n(x)|²
//! ```
//! Since *V*<sub>eff</sub> depends on *ρ*, which depends on the solutions
//! *ψ*<sub>*n*</sub>, the equations are solved self-consistently: guess a
//! density, build the Hamiltonian, diagonalize, rebuild the density, and
//! repeat until nothing changes. This crate supplies every step of that loop
//! except the loop itself and the diagonalization.
//!
//! # Finite differences
//! Assuming a discretization
//! ```text
//! x[i] = x₀ + i h, i ∊ {0, ..., N - 1}
//! f[i] = f(x[i])
//! ```
//! the derivative operators are the usual centered three-point stencils,
//! ```text
//! D  = (I{+1} - I{-1}) / 2h
//! D2 = (I{-1} - 2 I{0} + I{+1}) / h²
//! ```
//! where *I*{*k*} is the *N*×*N* matrix with elements equal to 1 on the *k*-th
//! diagonal and 0 elsewhere. Both have *O*(*h*²) error terms.
//!
//! At the edges of the grid the stencils would need the points *x*\[-1\] and
//! *x*\[*N*\]. Rather than switching to a one-sided scheme, the entries
//! `[0, 0]`, `[0, 1]`, `[1, 0]`, `[N - 1, N - 2]`, `[N - 2, N - 1]`, and
//! `[N - 1, N - 1]` are set to zero. This corresponds to wavefunctions that
//! vanish at (and just beyond) the domain boundaries, which is the usual
//! situation for bound states on a sufficiently wide grid; the kinetic energy
//! operator -*D2*/2 then gives a symmetric Hamiltonian whose eigenvectors can
//! be used directly as orbitals.
//!
//! Since the operators are tridiagonal, they can be stored as three diagonals
//! instead of an *N*×*N* matrix (see [`Repr`][crate::operator::Repr]). The dense
//! form is convenient for handing to a general eigensolver.
//!
//! # Quadrature
//! Integrals over the grid use the composite Simpson's rule. For each pair of
//! adjacent intervals with widths *h*₀ and *h*₁,
//! ```text
//!  x₂
//! ∫  f dx ≈ (h₀ + h₁)/6 [(2 - h₁/h₀) f₀ + (h₀ + h₁)²/(h₀ h₁) f₁ + (2 - h₀/h₁) f₂]
//!  x₀
//! ```
//! which reduces to (*h*/3) (*f*₀ + 4 *f*₁ + *f*₂) on a uniform grid and has an
//! *O*(*h*⁴) global error. An even number of samples leaves one interval over;
//! it is integrated using the parabola through the last three points[^2],
//! ```text
//!  x[N-1]
//! ∫      f dx ≈ α f[N - 1] + β f[N - 2] - η f[N - 3]
//!  x[N-2]
//!
//! α = (2 h₁² + 3 h₁ h₀) / 6 (h₀ + h₁)
//! β = (h₁² + 3 h₁ h₀) / 6 h₀
//! η = h₁³ / 6 h₀ (h₀ + h₁)
//! ```
//! with *h*₀ and *h*₁ the widths of the last two intervals.
//!
//! # Density
//! Orbitals are filled from the bottom up, two electrons (one per spin) at a
//! time. An odd electron count leaves the highest occupied orbital with a
//! single electron:
//! ```text
//! N_e = 5  →  f = [2, 2, 1]
//! N_e = 4  →  f = [2, 2]
//! ```
//! Each orbital is normalized so that ∫ |*ψ*<sub>*n*</sub>|² d*x* = 1, which
//! makes ∫ *ρ* d*x* = *N*<sub>e</sub>.
//!
//! # Exchange
//! In the local density approximation, the exchange energy is that of a
//! uniform electron gas evaluated pointwise at the local density[^3],
//! ```text
//!            3  3 1/3   ⌠
//! E_x[ρ] = - - (-)      ⎮ ρ(x)^(4/3) dx
//!            4  π       ⌡
//! ```
//! with the potential given by the functional derivative,
//! ```text
//!          δE_x       3 1/3
//! V_x(x) = ----  = - (-)    ρ(x)^(1/3)
//!           δρ        π
//! ```
//! Fractional powers of negative numbers are not real, so densities must be
//! non-negative everywhere.
//!
//! # Coulomb interaction
//! The classical electrostatic (Hartree) energy of the density is
//! ```text
//!          1 ⌠⌠ ρ(x) ρ(x')
//! E_H[ρ] = - ⎮⎮ ---------- dx dx'
//!          2 ⌡⌡  |x - x'|
//! ```
//! In one dimension the bare kernel is not integrable at *x* = *x'*, so it is
//! replaced by the soft-Coulomb form[^4]
//! ```text
//!      1               1
//! ---------  →  ----------------
//! |x - x'|      √((x - x')² + ε)
//! ```
//! and the integrals are evaluated as plain sums over grid points,
//! ```text
//! V_H(x[i]) = Σ_j ρ[j] h / √((x[i] - x[j])² + ε)
//! E_H       = (1/2) Σ_i Σ_j ρ[i] ρ[j] h² / √((x[i] - x[j])² + ε)
//! ```
//! The self-interaction term *i* = *j* is kept. Larger *ε* softens the
//! interaction at short range and lowers the potential near sharp peaks in the
//! density. Evaluation requires *O*(*N*²) kernel evaluations and is the most
//! expensive step in an SCF iteration.
//!
//! [^1]: W. Kohn and L. J. Sham, "Self-consistent equations including exchange
//! and correlation effects." Physical Review **140** A1133 (1965).
//!
//! [^2]: K. Cartwright, "Simpson's rule cumulative integration with MS Excel
//! and irregularly-spaced data." Journal of Mathematical Sciences and
//! Mathematics Education **12** 2 1-9 (2017).
//!
//! [^3]: P. A. M. Dirac, "Note on exchange phenomena in the Thomas atom."
//! Mathematical Proceedings of the Cambridge Philosophical Society **26** 3
//! 376-385 (1930).
//!
//! [^4]: J. H. Eberly, Q. Su, and J. Javanainen, "Nonlinear light scattering
//! accompanying multiphoton ionization." Physical Review Letters **62** 881
//! (1989).
