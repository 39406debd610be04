//! Closed enumerations for the literal-valued fields of the Paddle schema.
//!
//! Every enumeration here is validated when a response is deserialized: a
//! value outside the known set is a decode failure, not a free-form string.
//!
//! # Macro-based code types
//!
//! The `code_enum!` macro keeps the wire value, the serde representation and
//! the `FromStr`/`Display` implementations of each enumeration in one place.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::SchemaError;

/// Define a closed string enumeration with standard trait implementations.
///
/// Generates:
/// - `Clone`, `Copy`, `PartialEq`, `Eq`, `Hash`, `Debug`
/// - `Serialize`, `Deserialize` (as the wire string)
/// - `FromStr`, `Display`
/// - `ALL` and `as_str()`
macro_rules! code_enum {
    (
        $(#[$meta:meta])*
        $name:ident, $kind:literal {
            $($variant:ident => $wire:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                #[doc = $wire]
                #[serde(rename = $wire)]
                $variant,
            )+
        }

        impl $name {
            /// Every accepted value, in declaration order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            /// The value as sent on the wire.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $wire,)+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = SchemaError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($wire => Ok(Self::$variant),)+
                    other => Err(SchemaError::UnknownCode {
                        kind: $kind,
                        value: other.to_string(),
                    }),
                }
            }
        }
    };
}

code_enum! {
    /// Lifecycle status shared by products and prices.
    Status, "status" {
        Active => "active",
        Archived => "archived",
    }
}

code_enum! {
    /// Tax category of a product. Some categories need approval on the
    /// seller account before they are accepted.
    TaxCategory, "tax category" {
        Standard => "standard",
        Saas => "saas",
        Ebooks => "ebooks",
        DigitalGoods => "digital-goods",
        WebsiteHosting => "website-hosting",
        HumanServices => "human-services",
        ImplementationServices => "implementation-services",
        TrainingServices => "training-services",
        ProfessionalServices => "professional-services",
        SoftwareProgrammingServices => "software-programming-services",
    }
}

code_enum! {
    /// How tax is calculated for a price.
    TaxMode, "tax mode" {
        Internal => "internal",
        External => "external",
        AccountSetting => "account_setting",
    }
}

code_enum! {
    /// Unit of a billing cycle or trial period.
    Interval, "interval" {
        Day => "day",
        Week => "week",
        Month => "month",
        Year => "year",
    }
}

code_enum! {
    /// Supported ISO 4217 currency code.
    CurrencyCode, "currency code" {
        Ars => "ARS",
        Aud => "AUD",
        Brl => "BRL",
        Cad => "CAD",
        Chf => "CHF",
        Cny => "CNY",
        Czk => "CZK",
        Dkk => "DKK",
        Eur => "EUR",
        Gbp => "GBP",
        Hkd => "HKD",
        Huf => "HUF",
        Ils => "ILS",
        Inr => "INR",
        Jpy => "JPY",
        Krw => "KRW",
        Mxn => "MXN",
        Nok => "NOK",
        Nzd => "NZD",
        Pln => "PLN",
        Rub => "RUB",
        Sek => "SEK",
        Sgd => "SGD",
        Thb => "THB",
        Try => "TRY",
        Twd => "TWD",
        Uah => "UAH",
        Usd => "USD",
        Zar => "ZAR",
    }
}

code_enum! {
    /// ISO 3166-1 alpha-2 country code.
    CountryCode, "country code" {
        Ad => "AD",
        Ae => "AE",
        Af => "AF",
        Ag => "AG",
        Ai => "AI",
        Al => "AL",
        Am => "AM",
        An => "AN",
        Ao => "AO",
        Ar => "AR",
        As => "AS",
        At => "AT",
        Au => "AU",
        Aw => "AW",
        Ax => "AX",
        Az => "AZ",
        Ba => "BA",
        Bb => "BB",
        Bd => "BD",
        Be => "BE",
        Bf => "BF",
        Bg => "BG",
        Bh => "BH",
        Bi => "BI",
        Bj => "BJ",
        Bm => "BM",
        Bn => "BN",
        Bo => "BO",
        Bq => "BQ",
        Br => "BR",
        Bs => "BS",
        Bt => "BT",
        Bv => "BV",
        Bw => "BW",
        By => "BY",
        Bz => "BZ",
        Ca => "CA",
        Cc => "CC",
        Cf => "CF",
        Cg => "CG",
        Ch => "CH",
        Ci => "CI",
        Ck => "CK",
        Cl => "CL",
        Cm => "CM",
        Cn => "CN",
        Co => "CO",
        Cr => "CR",
        Cu => "CU",
        Cv => "CV",
        Cw => "CW",
        Cx => "CX",
        Cy => "CY",
        Cz => "CZ",
        De => "DE",
        Dj => "DJ",
        Dk => "DK",
        Dm => "DM",
        Do => "DO",
        Dz => "DZ",
        Ec => "EC",
        Ee => "EE",
        Eg => "EG",
        Eh => "EH",
        Er => "ER",
        Es => "ES",
        Et => "ET",
        Fi => "FI",
        Fj => "FJ",
        Fk => "FK",
        Fm => "FM",
        Fo => "FO",
        Fr => "FR",
        Ga => "GA",
        Gb => "GB",
        Gd => "GD",
        Ge => "GE",
        Gf => "GF",
        Gg => "GG",
        Gh => "GH",
        Gi => "GI",
        Gl => "GL",
        Gm => "GM",
        Gn => "GN",
        Gp => "GP",
        Gq => "GQ",
        Gr => "GR",
        Gs => "GS",
        Gt => "GT",
        Gu => "GU",
        Gw => "GW",
        Gy => "GY",
        Hk => "HK",
        Hm => "HM",
        Hn => "HN",
        Hr => "HR",
        Ht => "HT",
        Hu => "HU",
        Id => "ID",
        Ie => "IE",
        Il => "IL",
        Im => "IM",
        In => "IN",
        Io => "IO",
        Iq => "IQ",
        Ir => "IR",
        Is => "IS",
        It => "IT",
        Je => "JE",
        Jm => "JM",
        Jo => "JO",
        Jp => "JP",
        Ke => "KE",
        Kg => "KG",
        Kh => "KH",
        Ki => "KI",
        Km => "KM",
        Kn => "KN",
        Kp => "KP",
        Kr => "KR",
        Kw => "KW",
        Ky => "KY",
        Kz => "KZ",
        La => "LA",
        Lb => "LB",
        Lc => "LC",
        Li => "LI",
        Lk => "LK",
        Lr => "LR",
        Ls => "LS",
        Lt => "LT",
        Lu => "LU",
        Lv => "LV",
        Ly => "LY",
        Ma => "MA",
        Mc => "MC",
        Md => "MD",
        Me => "ME",
        Mf => "MF",
        Mg => "MG",
        Mh => "MH",
        Mk => "MK",
        Ml => "ML",
        Mm => "MM",
        Mn => "MN",
        Mo => "MO",
        Mp => "MP",
        Mq => "MQ",
        Mr => "MR",
        Ms => "MS",
        Mt => "MT",
        Mu => "MU",
        Mv => "MV",
        Mw => "MW",
        Mx => "MX",
        My => "MY",
        Mz => "MZ",
        Na => "NA",
        Nc => "NC",
        Ne => "NE",
        Nf => "NF",
        Ng => "NG",
        Ni => "NI",
        Nl => "NL",
        No => "NO",
        Np => "NP",
        Nr => "NR",
        Nu => "NU",
        Nz => "NZ",
        Om => "OM",
        Pa => "PA",
        Pe => "PE",
        Pf => "PF",
        Pg => "PG",
        Ph => "PH",
        Pk => "PK",
        Pl => "PL",
        Pm => "PM",
        Pn => "PN",
        Pr => "PR",
        Ps => "PS",
        Pt => "PT",
        Pw => "PW",
        Py => "PY",
        Qa => "QA",
        Re => "RE",
        Ro => "RO",
        Rs => "RS",
        Ru => "RU",
        Rw => "RW",
        Sa => "SA",
        Sb => "SB",
        Sc => "SC",
        Sd => "SD",
        Se => "SE",
        Sg => "SG",
        Sh => "SH",
        Si => "SI",
        Sj => "SJ",
        Sk => "SK",
        Sl => "SL",
        Sm => "SM",
        Sn => "SN",
        So => "SO",
        Sr => "SR",
        St => "ST",
        Sv => "SV",
        Sy => "SY",
        Sz => "SZ",
        Tc => "TC",
        Td => "TD",
        Tf => "TF",
        Tg => "TG",
        Th => "TH",
        Tj => "TJ",
        Tk => "TK",
        Tl => "TL",
        Tm => "TM",
        Tn => "TN",
        To => "TO",
        Tr => "TR",
        Tt => "TT",
        Tv => "TV",
        Tw => "TW",
        Tz => "TZ",
        Ua => "UA",
        Ug => "UG",
        Um => "UM",
        Us => "US",
        Uy => "UY",
        Uz => "UZ",
        Va => "VA",
        Vc => "VC",
        Ve => "VE",
        Vg => "VG",
        Vi => "VI",
        Vn => "VN",
        Vu => "VU",
        Wf => "WF",
        Ws => "WS",
        Ye => "YE",
        Yt => "YT",
        Za => "ZA",
        Zm => "ZM",
        Zw => "ZW",
    }
}
