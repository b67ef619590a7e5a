// Copyright (c) 2018-2022  Ministerio de Fomento
//                          Instituto de Ciencias de la Construcción Eduardo Torroja (IETcc-CSIC)

// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:

// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.

// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.

// Author(s): Rafael Villar Burke <pachi@ietcc.csic.es>,
//            Daniel Jiménez González <dani@ietcc.csic.es>,
//            Marta Sorribes Gil <msorribes@ietcc.csic.es>

// -----------------------------------------------------------------------------------
// Vector utilities
// -----------------------------------------------------------------------------------

use num::Float;

// Elementwise sum res[i] = vec1[i] + vec2[i]
pub fn vecvecsum<T: Float, const N: usize>(vec1: &[T; N], vec2: &[T; N]) -> [T; N] {
    std::array::from_fn(|ii| vec1[ii] + vec2[ii])
}

// Elementwise difference res[i] = vec1[i] - vec2[i]
pub fn vecvecdif<T: Float, const N: usize>(vec1: &[T; N], vec2: &[T; N]) -> [T; N] {
    std::array::from_fn(|ii| vec1[ii] - vec2[ii])
}

// Elementwise multiplication res[i] = vec1[i] * vec2[i]
pub fn vecvecmul<T: Float, const N: usize>(vec1: &[T; N], vec2: &[T; N]) -> [T; N] {
    std::array::from_fn(|ii| vec1[ii] * vec2[ii])
}

// Elementwise division res[i] = vec1[i] / vec2[i]
// Returns the index of the first zero divisor as error
pub fn vecvecdiv<T: Float, const N: usize>(vec1: &[T; N], vec2: &[T; N]) -> Result<[T; N], usize> {
    if let Some(idx) = vec2.iter().position(|el| el.is_zero()) {
        return Err(idx);
    }
    Ok(std::array::from_fn(|ii| vec1[ii] / vec2[ii]))
}

// Multiply vector by scalar
pub fn veckmul<T: Float, const N: usize>(vec1: &[T; N], k: T) -> [T; N] {
    std::array::from_fn(|ii| vec1[ii] * k)
}

// Sum all elements in a vector
pub fn vecsum<T: Float, const N: usize>(vec: &[T; N]) -> T {
    vec.iter().fold(T::zero(), |acc, el| acc + *el)
}
