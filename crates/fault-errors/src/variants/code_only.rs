//! Variants identified by status code alone.

code_only_error!(
    /// The operation was canceled.
    Canceled, Cancelled, "operation canceled"
);
code_only_error!(
    /// Unrecoverable data loss or corruption.
    DataLoss, DataLoss, "data loss"
);
code_only_error!(
    /// The deadline expired before the operation completed.
    DeadlineExceeded, DeadlineExceeded, "deadline exceeded"
);
code_only_error!(
    /// Internal service error.
    Internal, Internal, "internal error"
);
code_only_error!(
    /// The request carried an invalid argument.
    InvalidArgument, InvalidArgument, "invalid argument"
);
code_only_error!(
    /// The service is temporarily unavailable.
    Unavailable, Unavailable, "service unavailable"
);
code_only_error!(
    /// The operation is not implemented.
    Unimplemented, Unimplemented, "not implemented"
);
