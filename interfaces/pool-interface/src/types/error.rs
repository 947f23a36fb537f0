use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    AlreadyInitialized = 0,
    Uninitialized = 1,

    NoReserveExistForAsset = 100,
    ReserveAlreadyInitialized = 101,
    ReservesMaxCapacityExceeded = 102,
    InvalidReserveParams = 103,
    NoPriceForAsset = 104,
    InvalidAssetPrice = 105,

    UserConfigInvalidIndex = 200,
    UserConfigNotExists = 201,

    InvalidAmount = 300,
    BurnExceedsBalance = 301,
    CalcAccountDataMathError = 302,

    ArithmeticOverflow = 400,
    MustBeLtePercentageFactor = 401,
    MustBeNonNegative = 402,

    IndexOverflow = 500,
    RateOverflow = 501,
    StaleTimestamp = 502,
}
