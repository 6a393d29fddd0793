/// Trial-division primality test.
///
/// Defined for every `i64`: zero, one and negative values are never prime.
/// Odd candidates are checked against odd divisors up to `floor(sqrt(n))`.
#[must_use]
pub fn is_prime(number: i64) -> bool {
    if number == 1 {
        return false;
    }
    if number == 2 {
        return true;
    }
    // 0, negatives (and 1 again)
    if number < 3 {
        return false;
    }
    if number % 2 == 0 {
        return false;
    }

    // `divisor <= number / divisor` is `divisor <= floor(sqrt(number))`
    // without the float rounding or the overflow of `divisor * divisor`.
    let mut divisor = 3;
    while divisor <= number / divisor {
        if number % divisor == 0 {
            return false;
        }
        divisor += 2;
    }
    true
}
